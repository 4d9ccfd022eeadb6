use crate::api;
use crate::catalog::RequestType;
use crate::config::Config;
use crate::error::NarrativeError;
use crate::output::OutputHandler;
use crate::validate;

/// Result of one run. `text` is always printable: either the generated
/// line or the request type's canned fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub success: bool,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }
}

/// Runs one generation end to end: dispatch, validate, and on any failure
/// substitute the canned line for the request type.
pub async fn execute(
    config: &Config,
    request_type: RequestType,
    output: &mut OutputHandler,
) -> Outcome {
    match api::dispatch(config, request_type, output).await {
        Ok(text) if validate::validate(request_type, &text) => Outcome {
            text,
            success: true,
        },
        Ok(_) => {
            // An empty answer falls back without a stderr diagnostic.
            log::warn!("{} returned no usable text, using fallback", request_type);
            let _ = output.print_debug(&NarrativeError::EmptyResponse.to_string());
            fallback_outcome(request_type)
        }
        Err(_) => fallback_outcome(request_type),
    }
}

/// Formats the stdout line. With `cache_line` set the text carries the
/// request tag in the `tag:text` shape the game's phrase cache stores.
pub fn render_line(request_type: RequestType, text: &str, cache_line: bool) -> String {
    if cache_line {
        format!("{}:{}", request_type.as_str(), text)
    } else {
        text.to_string()
    }
}

fn fallback_outcome(request_type: RequestType) -> Outcome {
    Outcome {
        text: request_type.fallback().to_string(),
        success: false,
    }
}
