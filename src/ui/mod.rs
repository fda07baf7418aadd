use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Wraps a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this function prints a newline
/// to clean up the terminal and returns `Ok(())` instead of propagating the error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Runs an inquire prompt, mapping user cancellation to `None`.
pub fn prompt_or_cancel<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(answer) => Ok(Some(answer)),
        Err(e) if is_prompt_cancelled(&e) => {
            println!();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_prompt_cancellation_ok() {
        let result = handle_prompt_cancellation(|| Ok(()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_operation_canceled() {
        let result = handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_other_error() {
        let Err(err) = handle_prompt_cancellation(|| Err(anyhow::anyhow!("Some other error")))
        else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Some other error"));
    }

    #[test]
    fn test_prompt_or_cancel_maps_cancellation_to_none() {
        let cancelled: Result<Option<String>> =
            prompt_or_cancel(Err(InquireError::OperationInterrupted));
        assert!(matches!(cancelled, Ok(None)));

        let answered = prompt_or_cancel(Ok("hello".to_string()));
        assert!(matches!(answered, Ok(Some(ref s)) if s == "hello"));
    }

    #[test]
    fn test_is_prompt_cancelled() {
        assert!(is_prompt_cancelled(&InquireError::OperationCanceled));
        assert!(is_prompt_cancelled(&InquireError::OperationInterrupted));
        assert!(!is_prompt_cancelled(&InquireError::Custom("test".into())));
    }
}
