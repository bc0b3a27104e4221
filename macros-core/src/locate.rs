use crate::canonicalize;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    parse::{Error, Parse, ParseStream, Result},
    Expr, Ident, Path, Token,
};
use std::collections::HashSet;

/// Suffix of a field bit position constant.
pub const POS_SUFFIX: &str = "POS";
/// Suffix of a field bit mask constant.
pub const MSK_SUFFIX: &str = "MSK";
/// Suffix of a peripheral instance base address constant.
pub const BASE_SUFFIX: &str = "BASE";
/// Suffix of a register offset constant.
pub const OFFSET_SUFFIX: &str = "OFFSET";

/// Symbolic keys of a field's position and mask constants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldKeys {
    /// Bit position key.
    pub pos: String,
    /// Bit mask key.
    pub msk: String,
}

/// Composes the register key `{FAMILY}_{REG}` after canonicalizing
/// `peripheral`.
pub fn register_key(peripheral: &str, register: &str) -> String {
    format!("{}_{}", canonicalize(peripheral), register.to_uppercase())
}

/// Composes the register offset key `{FAMILY}_{REG}_OFFSET`.
pub fn offset_key(peripheral: &str, register: &str) -> String {
    format!("{}_{OFFSET_SUFFIX}", register_key(peripheral, register))
}

/// Composes the base address key `{INSTANCE}_BASE`. The instance name is not
/// canonicalized, every instance has its own base.
pub fn base_key(instance: &str) -> String {
    format!("{}_{BASE_SUFFIX}", instance.to_uppercase())
}

/// Composes the `{FAMILY}_{REG}_{FIELD}_POS` and `{FAMILY}_{REG}_{FIELD}_MSK`
/// keys.
pub fn field_keys(peripheral: &str, register: &str, field: &str) -> FieldKeys {
    let key = format!("{}_{}", register_key(peripheral, register), field.to_uppercase());
    FieldKeys { pos: format!("{key}_{POS_SUFFIX}"), msk: format!("{key}_{MSK_SUFFIX}") }
}

/// Peripheral instance reference: `[path::]INSTANCE`.
///
/// The optional path points to the module where the register definition table
/// lives.
pub struct Peripheral {
    /// Module path tokens, including the trailing `::`.
    pub prefix: TokenStream,
    /// Instance name.
    pub ident: Ident,
}

/// Register reference: `[path::]INSTANCE, REG`.
pub struct Target {
    /// Peripheral instance.
    pub peripheral: Peripheral,
    /// Register name.
    pub register: Ident,
}

/// Single field assignment: `FIELD = value`.
pub struct FieldValue {
    /// Field name.
    pub field: Ident,
    /// Value expression.
    pub value: Expr,
}

/// Comma-prefixed list of field assignments: `, A = 1, B = 2`.
///
/// May be empty. A trailing comma is allowed. A field assigned twice is a parse
/// error, names being compared case-insensitively.
pub struct FieldValues(pub Vec<FieldValue>);

impl Parse for Peripheral {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let path = input.call(Path::parse_mod_style)?;
        let mut segments =
            path.segments.into_iter().map(|segment| segment.ident).collect::<Vec<_>>();
        let ident = segments.pop().ok_or_else(|| input.error("Expected a peripheral name"))?;
        let leading_colon = path.leading_colon;
        let prefix = quote!(#leading_colon #(#segments::)*);
        Ok(Self { prefix, ident })
    }
}

impl Parse for Target {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let peripheral = input.parse()?;
        input.parse::<Token![,]>()?;
        let register = input.parse()?;
        Ok(Self { peripheral, register })
    }
}

impl Parse for FieldValue {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let field = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(Self { field, value })
    }
}

impl Parse for FieldValues {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut values = Vec::<FieldValue>::new();
        let mut names = HashSet::new();
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let value = input.parse::<FieldValue>()?;
            if !names.insert(value.field.to_string().to_uppercase()) {
                return Err(Error::new(
                    value.field.span(),
                    format!("field `{}` is assigned twice", value.field),
                ));
            }
            values.push(value);
        }
        Ok(Self(values))
    }
}

impl Peripheral {
    /// Returns a path to the instance base address constant.
    pub fn base(&self) -> TokenStream {
        self.path(&base_key(&self.ident.to_string()), self.ident.span())
    }

    /// Returns a path to the offset constant of `register`.
    pub fn offset(&self, register: &Ident) -> TokenStream {
        let key = offset_key(&self.ident.to_string(), &register.to_string());
        self.path(&key, register.span())
    }

    /// Returns an expression evaluating to the address of `register`.
    pub fn address(&self, register: &Ident) -> TokenStream {
        let base = self.base();
        let offset = self.offset(register);
        quote!(#base + #offset)
    }

    fn path(&self, key: &str, span: Span) -> TokenStream {
        let prefix = &self.prefix;
        let ident = Ident::new(key, span);
        quote!(#prefix #ident)
    }
}

impl Target {
    /// Returns an expression evaluating to the register address.
    pub fn address(&self) -> TokenStream {
        self.peripheral.address(&self.register)
    }

    /// Returns paths to the position and mask constants of `field`.
    pub fn field(&self, field: &Ident) -> (TokenStream, TokenStream) {
        let FieldKeys { pos, msk } = field_keys(
            &self.peripheral.ident.to_string(),
            &self.register.to_string(),
            &field.to_string(),
        );
        (self.peripheral.path(&pos, field.span()), self.peripheral.path(&msk, field.span()))
    }
}
