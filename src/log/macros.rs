/// Prints to [`STDOUT_STREAM`](crate::log::STDOUT_STREAM) if the debug probe
/// listens to it.
///
/// The arguments are formatted only when the stream is enabled.
///
/// ```
/// drone_cmsis::print!("ready: {}", true);
/// ```
#[macro_export]
macro_rules! print {
    ($str:expr) => {
        if $crate::log::stdout().is_enabled() {
            $crate::log::write_str($crate::log::STDOUT_STREAM, $str);
        }
    };
    ($($arg:tt)*) => {
        if $crate::log::stdout().is_enabled() {
            $crate::log::write_fmt($crate::log::STDOUT_STREAM, format_args!($($arg)*));
        }
    };
}

/// Prints to [`STDOUT_STREAM`](crate::log::STDOUT_STREAM) with a newline.
///
/// ```
/// drone_cmsis::println!();
/// drone_cmsis::println!("sysclk = {} Hz", 250_000_000);
/// ```
#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n");
    };
    ($fmt:expr) => {
        $crate::print!(concat!($fmt, "\n"));
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::print!(concat!($fmt, "\n"), $($arg)*);
    };
}

/// Prints to [`STDERR_STREAM`](crate::log::STDERR_STREAM) if the debug probe
/// listens to it.
#[macro_export]
macro_rules! eprint {
    ($str:expr) => {
        if $crate::log::stderr().is_enabled() {
            $crate::log::write_str($crate::log::STDERR_STREAM, $str);
        }
    };
    ($($arg:tt)*) => {
        if $crate::log::stderr().is_enabled() {
            $crate::log::write_fmt($crate::log::STDERR_STREAM, format_args!($($arg)*));
        }
    };
}

/// Prints to [`STDERR_STREAM`](crate::log::STDERR_STREAM) with a newline.
///
/// ```
/// drone_cmsis::eprintln!("HSE failed to start");
/// ```
#[macro_export]
macro_rules! eprintln {
    () => {
        $crate::eprint!("\n");
    };
    ($fmt:expr) => {
        $crate::eprint!(concat!($fmt, "\n"));
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::eprint!(concat!($fmt, "\n"), $($arg)*);
    };
}

/// Prints the value of an expression with its source location to
/// [`STDERR_STREAM`](crate::log::STDERR_STREAM), and returns the value.
///
/// ```
/// let sws = drone_cmsis::dbg!(0x0000_0018_u32 >> 3);
/// assert_eq!(sws, 3);
/// ```
#[macro_export]
macro_rules! dbg {
    () => {
        $crate::eprintln!("[{}:{}]", file!(), line!())
    };
    ($val:expr $(,)?) => {
        match $val {
            tmp => {
                $crate::eprintln!("[{}:{}] {} = {:#?}", file!(), line!(), stringify!($val), &tmp);
                tmp
            }
        }
    };
    ($($val:expr),+ $(,)?) => {
        ($($crate::dbg!($val)),+,)
    };
}
