//! Procedural macros for drone-cmsis.
//!
//! **Warning:** This crate should not be used directly. See `drone-cmsis`
//! documentation for details.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod access;
mod gpio_port;
mod table;

use proc_macro::TokenStream;

#[proc_macro]
pub fn table(input: TokenStream) -> TokenStream {
    table::proc_macro(input)
}

#[proc_macro]
pub fn reg_field(input: TokenStream) -> TokenStream {
    access::proc_macro_field(input)
}

#[proc_macro]
pub fn reg_register(input: TokenStream) -> TokenStream {
    access::proc_macro_register(input)
}

#[proc_macro]
pub fn reg_locator(input: TokenStream) -> TokenStream {
    access::proc_macro_locator(input)
}

#[proc_macro]
pub fn reg_get(input: TokenStream) -> TokenStream {
    access::proc_macro_get(input)
}

#[proc_macro]
pub fn reg_get_from(input: TokenStream) -> TokenStream {
    access::proc_macro_get_from(input)
}

#[proc_macro]
pub fn reg_set(input: TokenStream) -> TokenStream {
    access::proc_macro_set(input)
}

#[proc_macro]
pub fn reg_update(input: TokenStream) -> TokenStream {
    access::proc_macro_update(input)
}

#[proc_macro]
pub fn reg_wait(input: TokenStream) -> TokenStream {
    access::proc_macro_wait(input)
}

#[proc_macro]
pub fn gpio_port(input: TokenStream) -> TokenStream {
    gpio_port::proc_macro(input)
}
