//! Logging setup for the command line tools.
//!
//! Logs always go to stderr, stdout is reserved for the
//! tool's own output. Verbosity is taken from `RUST_LOG`,
//! falling back to the level handed in by the caller.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;

/// Init the subscriber with `INFO` as the default level.
///
/// Does nothing if a global subscriber is already set.
#[ inline ]
pub fn init_tracing_subscriber() {
    let _ = try_init_tracing_subscriber( LevelFilter::INFO );
}

/// Init the subscriber with `default` as the level used when
/// `RUST_LOG` is unset or unparsable.
///
/// # Errors
///
/// Fails when a global subscriber has been set already.
pub fn try_init_tracing_subscriber( default: LevelFilter )
    -> Result<(), TryInitError>
{

    use tracing_subscriber::prelude::*;

    use tracing_subscriber::{
        fmt,
        registry
    };

    use std::io::IsTerminal;

    let output = std::io::stderr;

    let fmt_layer = fmt::layer()
        .with_writer( output )
        .with_ansi( output().is_terminal() )
        .with_target( false )
        .without_time()
    ;

    let env_layer = EnvFilter::builder()
        .with_default_directive( default.into() )
        .from_env_lossy()
    ;

    registry()
        .with( fmt_layer )
        .with( env_layer )
        .try_init()

}

#[ cfg( test ) ]
mod tests {
    use super::*;

    #[ test ]
    fn second_init_is_an_error() {
        // The first call may race with other tests in this
        // binary, only the second one is certain to fail.
        let _ = try_init_tracing_subscriber( LevelFilter::DEBUG );
        assert!( try_init_tracing_subscriber( LevelFilter::DEBUG ).is_err() );
        // And the infallible one stays quiet about it.
        init_tracing_subscriber();
    }
}
