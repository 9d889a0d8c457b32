//! Extension methods for [`Result`]

/// Exit status used when a tool gives up on an error.
pub const FAILURE_EXIT_CODE: i32 = 1;

pub trait ResultExt<OK, ERR> {
    /// Peek at the Err and print it to stderr.
    #[ must_use ]
    fn print_error( self ) -> Self;

    /// Print Err and exit the program with [`FAILURE_EXIT_CODE`],
    /// or unwrap the value if Ok.
    fn print_error_exit_process( self ) -> OK;

    /// Like [`Self::print_error_exit_process`], but exits
    /// with `code`.
    fn print_error_exit_with( self, code: i32 ) -> OK;
}

impl<OK, ERR> ResultExt<OK, ERR> for Result<OK, ERR>
where
    ERR: std::fmt::Debug
{
    #[ inline ]
    fn print_error( self ) -> Self {
        self.inspect_err( |err| eprintln!( "Error: {err:?}" ) )
    }

    #[ inline ]
    fn print_error_exit_process( self ) -> OK {
        self.print_error_exit_with( FAILURE_EXIT_CODE )
    }

    #[ inline ]
    fn print_error_exit_with( self, code: i32 ) -> OK {
        match self.print_error() {
            Ok( it ) => it,
            Err( _ ) => std::process::exit( code ),
        }
    }
}

#[ cfg( test ) ]
mod tests {
    use super::*;

    #[ test ]
    fn ok_passes_through() {
        let it: Result<u8, String> = Ok( 7 );
        assert_eq!( it.print_error_exit_process(), 7 );
    }

    #[ test ]
    fn print_error_keeps_the_err() {
        let it: Result<u8, &str> = Err( "nope" );
        assert_eq!( it.print_error(), Err( "nope" ) );
    }
}
