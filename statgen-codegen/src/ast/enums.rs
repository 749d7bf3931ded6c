//! Rust enum builder.

use crate::builder::CodeBuilder;

/// A fieldless variant in a Rust enum.
#[derive(Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub discriminant: Option<i64>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discriminant: None,
        }
    }

    /// Set an explicit discriminant, e.g., `Foo = 3`.
    pub fn value(mut self, value: i64) -> Self {
        self.discriminant = Some(value);
        self
    }
}

/// Builder for Rust enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    derives: Vec<String>,
    attrs: Vec<String>,
    variants: Vec<Variant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            derives: Vec::new(),
            attrs: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Render the enum to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = builder.when(!self.derives.is_empty(), |b| {
            b.line(&format!("#[derive({})]", self.derives.join(", ")))
        });

        let builder = self
            .attrs
            .iter()
            .fold(builder, |b, attr| b.line(&format!("#[{}]", attr)));

        if self.variants.is_empty() {
            builder.line(&format!("pub enum {} {{}}", self.name))
        } else {
            builder.block_with_close(&format!("pub enum {} {{", self.name), "}", |b| {
                b.each(&self.variants, |b, variant| match variant.discriminant {
                    Some(value) => b.line(&format!("{} = {},", variant.name, value)),
                    None => b.line(&format!("{},", variant.name)),
                })
            })
        }
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::new()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_enum() {
        let e = Enum::new("Empty").build();
        assert_eq!(e, "pub enum Empty {}\n");
    }

    #[test]
    fn test_enum_with_discriminants() {
        let e = Enum::new("DBStatisticsTickerType")
            .derive("Copy")
            .derive("Clone")
            .attr("repr(u32)")
            .variant(Variant::new("BlockCacheMiss").value(0))
            .variant(Variant::new("BlockCacheHit").value(1))
            .build();
        assert_eq!(
            e,
            "#[derive(Copy, Clone)]\n\
             #[repr(u32)]\n\
             pub enum DBStatisticsTickerType {\n    \
             BlockCacheMiss = 0,\n    \
             BlockCacheHit = 1,\n\
             }\n"
        );
    }

    #[test]
    fn test_enum_with_plain_variants() {
        let e = Enum::new("Color")
            .variant(Variant::new("Red"))
            .variant(Variant::new("Negative").value(-1))
            .build();
        assert_eq!(e, "pub enum Color {\n    Red,\n    Negative = -1,\n}\n");
    }
}
