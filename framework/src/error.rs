use snafu::Snafu;

#[derive(Debug, Snafu)]
pub struct Error(OpaqueError);
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum OpaqueError {
    #[snafu(display("Unable to read timeout overrides from the environment: {}", source))]
    EnvOverrides { source: envy::Error },

    #[snafu(display("Invalid duration '{}' for timeout '{}': {}", value, name, source))]
    ParseDuration {
        name: String,
        value: String,
        source: humantime::DurationError,
    },

    #[snafu(display("Unknown timeout category '{}'", name))]
    ParseCategory { name: String },
}
