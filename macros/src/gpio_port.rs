use drone_cmsis_macros_core::Peripheral;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Ident};

const IDR: &str = "IDR";
const ODR: &str = "ODR";
const BSRR: &str = "BSRR";

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let port = parse_macro_input!(input as Peripheral);
    let span = port.ident.span();
    let [idr, odr, bsrr] = [IDR, ODR, BSRR].map(|register| {
        let address = port.address(&Ident::new(register, span));
        quote!(::drone_cmsis::reg::Register::<u32>::at(#address))
    });
    quote!(::drone_cmsis::gpio::Port::new(#idr, #odr, #bsrr)).into()
}
