use drone_cmsis_macros_core::{
    base_key, canonicalize, compile_error, field_keys, offset_key,
};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    braced,
    parse::{Parse, ParseStream, Result},
    parse_macro_input, Attribute, Ident, LitInt, Token,
};

/// Registers are 32 bits wide.
const REG_BITS: u32 = 32;

struct Table {
    families: Vec<Family>,
}

struct Family {
    attrs: Vec<Attribute>,
    ident: Ident,
    instances: Vec<Instance>,
    registers: Vec<Register>,
}

struct Instance {
    attrs: Vec<Attribute>,
    ident: Ident,
    address: LitInt,
}

struct Register {
    attrs: Vec<Attribute>,
    ident: Ident,
    offset: LitInt,
    fields: Vec<Field>,
}

struct Field {
    attrs: Vec<Attribute>,
    ident: Ident,
    pos: LitInt,
    msk: LitInt,
}

impl Parse for Table {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut families = Vec::new();
        while !input.is_empty() {
            families.push(input.parse()?);
        }
        Ok(Self { families })
    }
}

impl Parse for Family {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        let content;
        braced!(content in input);
        let mut instances = Vec::new();
        let mut registers = Vec::new();
        while !content.is_empty() {
            let attrs = content.call(Attribute::parse_outer)?;
            let ident = content.parse()?;
            let number = content.parse()?;
            if content.peek(Token![;]) {
                content.parse::<Token![;]>()?;
                instances.push(Instance { attrs, ident, address: number });
            } else {
                let body;
                braced!(body in content);
                let mut fields = Vec::new();
                while !body.is_empty() {
                    fields.push(body.parse()?);
                }
                registers.push(Register { attrs, ident, offset: number, fields });
            }
        }
        Ok(Self { attrs, ident, instances, registers })
    }
}

impl Parse for Field {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        let pos = input.parse()?;
        let msk = input.parse()?;
        input.parse::<Token![;]>()?;
        Ok(Self { attrs, ident, pos, msk })
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let Table { families } = parse_macro_input!(input);
    let mut tokens = Vec::new();
    for Family { attrs: family_attrs, ident: family, instances, registers } in families {
        let family_name = family.to_string();
        if canonicalize(&family_name) != family_name.to_uppercase() {
            compile_error!(
                family.span(),
                "`{}` is an instance name, use `{}` as the family",
                family_name,
                canonicalize(&family_name)
            );
        }
        for Instance { attrs, ident, address } in instances {
            let instance = ident.to_string();
            let resolved = canonicalize(&instance);
            if resolved != family_name.to_uppercase() {
                compile_error!(
                    ident.span(),
                    "`{}` belongs to family `{}`, not `{}`",
                    instance,
                    resolved,
                    family_name
                );
            }
            let base = format_ident!("{}", base_key(&instance), span = ident.span());
            tokens.push(quote! {
                #(#family_attrs)*
                #(#attrs)*
                pub const #base: usize = #address;
            });
        }
        for Register { attrs, ident, offset, fields } in registers {
            let register = ident.to_string();
            let offset_ident =
                format_ident!("{}", offset_key(&family_name, &register), span = ident.span());
            tokens.push(quote! {
                #(#family_attrs)*
                #(#attrs)*
                pub const #offset_ident: usize = #offset;
            });
            for Field { attrs, ident, pos, msk } in fields {
                match pos.base10_parse::<u32>() {
                    Ok(value) if value < REG_BITS => {}
                    Ok(value) => compile_error!(
                        pos.span(),
                        "Field position {} is out of a {}-bit register",
                        value,
                        REG_BITS
                    ),
                    Err(err) => return err.to_compile_error().into(),
                }
                match msk.base10_parse::<u32>() {
                    Ok(0) => compile_error!(msk.span(), "Field mask must not be zero"),
                    Ok(_) => {}
                    Err(err) => return err.to_compile_error().into(),
                }
                let keys = field_keys(&family_name, &register, &ident.to_string());
                let pos_ident = format_ident!("{}", keys.pos, span = ident.span());
                let msk_ident = format_ident!("{}", keys.msk, span = ident.span());
                tokens.push(quote! {
                    #(#family_attrs)*
                    #(#attrs)*
                    pub const #pos_ident: u32 = #pos;
                    #(#family_attrs)*
                    #(#attrs)*
                    pub const #msk_ident: u32 = #msk;
                });
            }
        }
    }
    quote!(#(#tokens)*).into()
}
