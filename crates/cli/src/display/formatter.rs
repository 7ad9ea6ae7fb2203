use archive_commands_core::{CommandKind, Error, InvocationOutcome, ValidationError};

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// One line per command: id, label, enabled, visible
pub fn print_status(kind: CommandKind, enabled: bool, visible: bool) {
    let descriptor = kind.descriptor();
    println!(
        "   {:<24} {:<16} enabled: {:<4} visible: {}",
        descriptor.id,
        descriptor.label,
        yes_no(enabled),
        yes_no(visible)
    );
}

/// Human-readable terminal state of an invocation
pub fn print_outcome(kind: CommandKind, outcome: &InvocationOutcome) {
    let label = kind.descriptor().label;
    match outcome {
        InvocationOutcome::Completed {
            result_path,
            message,
        } => {
            match result_path {
                Some(path) => println!("✅ {label}: {path}"),
                None => println!("✅ {label}: done"),
            }
            if let Some(message) = message {
                println!("   {message}");
            }
        }
        InvocationOutcome::Cancelled => println!("ℹ️  {label}: cancelled"),
        InvocationOutcome::Skipped(reason) => println!("ℹ️  {label}: nothing to do ({})", skip_reason(reason)),
        InvocationOutcome::Failed(e) => eprintln!("❌ {label} failed: {}", failure_reason(e)),
    }
}

fn skip_reason(reason: &ValidationError) -> String {
    reason.to_string()
}

fn failure_reason(error: &Error) -> String {
    match error {
        Error::NetworkError(cause) => format!("could not reach the archive service ({})", cause.message()),
        other => other.to_string(),
    }
}
