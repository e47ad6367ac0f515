/// Unwraps first argument and uses `assert_eq!()`.
#[macro_export]
macro_rules! unwrap_assert {
    ($l:expr, $r:expr) => {
        assert_eq!($l.unwrap(), $r)
    };
}

/// Creates an entry point for the app.
///
/// Command line errors exit with [`EXIT_USAGE`][crate::utils::EXIT_USAGE],
/// failed commands with the code given by their
/// [`ExitStatus`][crate::utils::ExitStatus].
#[macro_export]
macro_rules! make_app {
    ($cls:ty $(,$arg:ident)*) => {
        static_assertions::assert_impl_all!($cls: clap::Parser);
        fn main() {
            let args = <$cls>::try_parse().unwrap_or_else(|e| {
                // --help and --version are reported as errors too.
                if !e.use_stderr() {
                    e.exit()
                }
                let _ = e.print();
                std::process::exit($crate::utils::EXIT_USAGE);
            });
            match args.command.run($(args.$arg),*) {
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error: {}.", e);
                    std::process::exit($crate::utils::ExitStatus::exit_code(&e));
                }
            };
        }
    }
}
