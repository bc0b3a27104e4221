use drone_cmsis_macros_core::{FieldValue, FieldValues, Target};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream, Result},
    parse_macro_input, Expr, Ident, Token,
};

/// `[path::]INSTANCE, REG, FIELD`
struct FieldTarget {
    target: Target,
    field: Ident,
}

/// `[path::]INSTANCE, REG, A = 1, B = 2`
struct Assignments {
    target: Target,
    values: Vec<FieldValue>,
}

/// `value, [path::]INSTANCE, REG, FIELD`
struct Extract {
    value: Expr,
    inner: FieldTarget,
}

/// `place, [path::]INSTANCE, REG, A = 1, B = 2`
struct InPlace {
    place: Expr,
    inner: Assignments,
}

impl Parse for FieldTarget {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let target = input.parse()?;
        input.parse::<Token![,]>()?;
        let field = input.parse()?;
        input.parse::<Option<Token![,]>>()?;
        Ok(Self { target, field })
    }
}

impl Parse for Assignments {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let target = input.parse()?;
        let FieldValues(values) = input.parse()?;
        Ok(Self { target, values })
    }
}

impl Parse for Extract {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let value = input.parse()?;
        input.parse::<Token![,]>()?;
        let inner = input.parse()?;
        Ok(Self { value, inner })
    }
}

impl Parse for InPlace {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let place = input.parse()?;
        input.parse::<Token![,]>()?;
        let inner = input.parse()?;
        Ok(Self { place, inner })
    }
}

fn field(target: &Target, field: &Ident) -> TokenStream2 {
    let (pos, msk) = target.field(field);
    quote!(::drone_cmsis::reg::Field::<u32>::new(#pos, #msk))
}

fn register(target: &Target) -> TokenStream2 {
    let address = target.address();
    quote!(::drone_cmsis::reg::Register::<u32>::at(#address))
}

fn updates(target: &Target, values: &[FieldValue]) -> TokenStream2 {
    let updates = values.iter().map(|FieldValue { field: ident, value }| {
        let field = field(target, ident);
        quote!((#field, #value))
    });
    quote!([#(#updates),*])
}

pub fn proc_macro_field(input: TokenStream) -> TokenStream {
    let FieldTarget { target, field: ident } = parse_macro_input!(input);
    field(&target, &ident).into()
}

pub fn proc_macro_register(input: TokenStream) -> TokenStream {
    let target = parse_macro_input!(input as Target);
    register(&target).into()
}

pub fn proc_macro_locator(input: TokenStream) -> TokenStream {
    let FieldTarget { target, field: ident } = parse_macro_input!(input);
    let register = register(&target);
    let field = field(&target, &ident);
    quote!(::drone_cmsis::reg::Locator::from_parts(#register, #field)).into()
}

pub fn proc_macro_get(input: TokenStream) -> TokenStream {
    let FieldTarget { target, field: ident } = parse_macro_input!(input);
    let register = register(&target);
    let field = field(&target, &ident);
    quote!(::drone_cmsis::reg::RReg::read(&#register, #field)).into()
}

pub fn proc_macro_get_from(input: TokenStream) -> TokenStream {
    let Extract { value, inner: FieldTarget { target, field: ident } } = parse_macro_input!(input);
    let field = field(&target, &ident);
    quote!(#field.read(#value)).into()
}

pub fn proc_macro_set(input: TokenStream) -> TokenStream {
    let Assignments { target, values } = parse_macro_input!(input);
    let register = register(&target);
    let updates = updates(&target, &values);
    quote!(::drone_cmsis::reg::RwReg::modify(&#register, #updates)).into()
}

pub fn proc_macro_update(input: TokenStream) -> TokenStream {
    let InPlace { place: expr, inner: Assignments { target, values } } =
        parse_macro_input!(input);
    let place = Ident::new("place", Span::mixed_site());
    let updates = updates(&target, &values);
    quote! {{
        let #place = &mut #expr;
        *#place = ::drone_cmsis::reg::combine(*#place, #updates);
    }}
    .into()
}

pub fn proc_macro_wait(input: TokenStream) -> TokenStream {
    let Assignments { target, values } = parse_macro_input!(input);
    if values.is_empty() {
        return syn::Error::new(target.register.span(), "Expected at least one field to wait for")
            .to_compile_error()
            .into();
    }
    let register = register(&target);
    let updates = updates(&target, &values);
    quote!(::drone_cmsis::reg::RReg::wait(&#register, #updates)).into()
}
