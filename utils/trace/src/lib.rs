use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` is used as the filter
/// directive. Output goes to stderr so stdout stays free for command output.
pub fn init(level: &str) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| filter_for(level))?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr));

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

pub fn filter_for(level: &str) -> Result<EnvFilter, TracingInitError> {
    EnvFilter::try_new(level).map_err(|source| TracingInitError::InvalidFilter {
        directive: level.to_string(),
        source,
    })
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("InvalidFilter: {directive}: {source}")]
    InvalidFilter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("SetGlobalDefault: {source}")]
    SetGlobalDefault {
        #[from]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_levels_and_directives() {
        assert!(filter_for("info").is_ok());
        assert!(filter_for("warn,projects_portfolio=debug").is_ok());
    }

    #[test]
    fn rejects_garbage_directive() {
        let err = filter_for("projects_portfolio=verbose").unwrap_err();
        assert!(err.to_string().starts_with("InvalidFilter: projects_portfolio=verbose"));
    }
}
