/// Unconditionally causes parsing to fail with the given error message.
#[macro_export]
macro_rules! compile_error {
    ($span:expr, $fmt:expr, $($args:tt)*) => {
        return ::syn::parse::Error::new(
            $span,
            format!($fmt, $($args)*),
        )
        .to_compile_error()
        .into()
    };
    ($span:expr, $fmt:expr) => {
        $crate::compile_error!($span, $fmt,)
    };
}
