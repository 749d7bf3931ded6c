//! The extraction-and-emission pipeline.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use statgen_manifest::{Manifest, OutputConfig, TaskConfig};
use tracing::{debug, info, warn};

use crate::{
    HeaderSource, Result,
    ast::{Enum, Variant},
    builder::CodeBuilder,
    extract::{LineRules, RawEntry, ResolvedEntry, TaskState, scan_enum},
};

/// Variants extracted for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumBinding {
    pub name: String,
    pub variants: Vec<ResolvedEntry>,
}

impl EnumBinding {
    /// Smallest and largest variant value.
    pub fn value_range(&self) -> Option<(i64, i64)> {
        let min = self.variants.iter().map(|v| v.value).min()?;
        let max = self.variants.iter().map(|v| v.value).max()?;
        Some((min, max))
    }

    fn to_enum(&self, output: &OutputConfig) -> Enum {
        let e = output
            .derives
            .iter()
            .fold(Enum::new(&self.name), |e, derive| e.derive(derive));
        // rustc rejects a repr on an enum without variants
        let e = if self.variants.is_empty() {
            e
        } else {
            e.attr(format!("repr({})", output.repr))
        };
        self.variants.iter().fold(e, |e, v| {
            e.variant(Variant::new(&v.name).value(v.value))
        })
    }
}

/// A fully generated bindings file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub content: String,
    pub enums: Vec<EnumBinding>,
}

/// Runs every task of a manifest against the headers under a root directory.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    root: PathBuf,
}

impl<'a> Generator<'a> {
    /// Relative source paths resolve against `root`.
    pub fn new(manifest: &'a Manifest, root: impl Into<PathBuf>) -> Self {
        Self {
            manifest,
            root: root.into(),
        }
    }

    pub fn manifest(&self) -> &'a Manifest {
        self.manifest
    }

    /// Extract the variants of every task, in manifest order.
    pub fn extract(&self) -> Result<Vec<EnumBinding>> {
        self.manifest
            .tasks
            .iter()
            .map(|task| self.extract_task(task))
            .collect()
    }

    /// Extract every task and render the bindings file.
    ///
    /// Nothing is rendered unless all tasks succeed.
    pub fn generate(&self) -> Result<GeneratedFile> {
        let enums = self.extract()?;
        let content = render_file(&self.manifest.output, &enums);
        info!(
            enums = enums.len(),
            variants = enums.iter().map(|e| e.variants.len()).sum::<usize>(),
            "generated bindings"
        );
        Ok(GeneratedFile { content, enums })
    }

    /// Extract the variants of a single task.
    pub fn extract_task(&self, task: &TaskConfig) -> Result<EnumBinding> {
        let mut state = TaskState::new(&task.sentinel_suffix);
        let mut variants = Vec::new();
        let mut emitted = Emitted::new(&self.manifest.output.repr);

        for source in &task.sources {
            let path = self.resolve(&source.path);
            let header = HeaderSource::read(&path)?;
            let entries = scan_enum(&header, &LineRules::new(&source.enum_name))?;
            debug!(
                task = %task.name,
                path = %path.display(),
                enum_name = %source.enum_name,
                entries = entries.len(),
                "scanned header"
            );

            let before = variants.len();
            for entry in &entries {
                if let Some(resolved) = state.take(entry, &header)? {
                    emitted.insert(&resolved, entry, &header)?;
                    variants.push(resolved);
                }
            }
            if variants.len() == before {
                warn!(
                    task = %task.name,
                    path = %path.display(),
                    enum_name = %source.enum_name,
                    "enum contributed no variants"
                );
            }
        }

        Ok(EnumBinding {
            name: task.name.clone(),
            variants,
        })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Variants already emitted for a task, checked so the rendered enum compiles.
struct Emitted<'a> {
    repr: &'a str,
    bounds: Option<(i128, i128)>,
    names: HashMap<String, String>,
    values: HashMap<i64, String>,
}

impl<'a> Emitted<'a> {
    fn new(repr: &'a str) -> Self {
        Self {
            repr,
            bounds: repr_bounds(repr),
            names: HashMap::new(),
            values: HashMap::new(),
        }
    }

    fn insert(
        &mut self,
        resolved: &ResolvedEntry,
        entry: &RawEntry,
        header: &HeaderSource,
    ) -> Result<()> {
        let source_name = &resolved.source_name;
        if let Some((min, max)) = self.bounds {
            let value = i128::from(resolved.value);
            if value < min || value > max {
                return Err(header.value_out_of_range_error(
                    source_name,
                    resolved.value,
                    self.repr,
                    entry.span,
                ));
            }
        }
        if let Some(first) = self.names.get(&resolved.name) {
            return Err(header.duplicate_variant_error(
                source_name,
                &resolved.name,
                first,
                entry.span,
            ));
        }
        if let Some(first) = self.values.get(&resolved.value) {
            return Err(header.duplicate_value_error(
                source_name,
                resolved.value,
                first,
                entry.span,
            ));
        }
        self.names.insert(resolved.name.clone(), source_name.clone());
        self.values.insert(resolved.value, source_name.clone());
        Ok(())
    }
}

/// Discriminant range of a primitive integer repr. Pointer-sized types are
/// taken as 64-bit.
fn repr_bounds(repr: &str) -> Option<(i128, i128)> {
    let bounds = match repr {
        "u8" => (0, u8::MAX.into()),
        "u16" => (0, u16::MAX.into()),
        "u32" => (0, u32::MAX.into()),
        "u64" | "usize" => (0, u64::MAX.into()),
        "i8" => (i8::MIN.into(), i8::MAX.into()),
        "i16" => (i16::MIN.into(), i16::MAX.into()),
        "i32" => (i32::MIN.into(), i32::MAX.into()),
        "i64" | "isize" => (i64::MIN.into(), i64::MAX.into()),
        _ => return None,
    };
    Some(bounds)
}

/// Render the generation notice followed by one enum per binding.
pub fn render_file(output: &OutputConfig, enums: &[EnumBinding]) -> String {
    let builder = CodeBuilder::new()
        .each(&output.notice, |b, line| b.rust_doc(line))
        .when(!output.notice.is_empty(), |b| b.blank());

    enums
        .iter()
        .enumerate()
        .fold(builder, |b, (i, binding)| {
            let b = b.when(i > 0, |b| b.blank());
            binding.to_enum(output).render(b)
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(name: &str, values: &[(&str, i64)]) -> EnumBinding {
        EnumBinding {
            name: name.to_string(),
            variants: values
                .iter()
                .map(|(n, v)| ResolvedEntry {
                    source_name: n.to_uppercase(),
                    name: n.to_string(),
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_file() {
        let output = OutputConfig {
            notice: vec!["Generated.".to_string()],
            derives: vec!["Copy".to_string(), "Clone".to_string()],
            repr: "u32".to_string(),
        };
        let content = render_file(
            &output,
            &[binding("A", &[("One", 0), ("Two", 1)]), binding("B", &[("X", 5)])],
        );
        assert_eq!(
            content,
            "/// Generated.\n\
             \n\
             #[derive(Copy, Clone)]\n\
             #[repr(u32)]\n\
             pub enum A {\n    One = 0,\n    Two = 1,\n}\n\
             \n\
             #[derive(Copy, Clone)]\n\
             #[repr(u32)]\n\
             pub enum B {\n    X = 5,\n}\n"
        );
    }

    #[test]
    fn test_render_without_notice() {
        let output = OutputConfig {
            notice: Vec::new(),
            derives: Vec::new(),
            repr: "u8".to_string(),
        };
        let content = render_file(&output, &[binding("A", &[("One", 0)])]);
        assert_eq!(content, "#[repr(u8)]\npub enum A {\n    One = 0,\n}\n");
    }

    #[test]
    fn test_render_empty_binding_without_repr() {
        let content = render_file(&Manifest::builtin().output, &[binding("Empty", &[])]);
        assert!(content.ends_with(
            "#[derive(Copy, Clone, Debug, Eq, PartialEq)]\npub enum Empty {}\n"
        ));
        assert!(!content.contains("#[repr"));
    }

    #[test]
    fn test_repr_bounds() {
        assert_eq!(repr_bounds("u8"), Some((0, 255)));
        assert_eq!(repr_bounds("i32"), Some((-2147483648, 2147483647)));
        assert_eq!(repr_bounds("u32"), Some((0, 4294967295)));
        assert_eq!(repr_bounds("f32"), None);
    }

    #[test]
    fn test_value_range() {
        assert_eq!(binding("A", &[]).value_range(), None);
        assert_eq!(
            binding("A", &[("X", 3), ("Y", 0), ("Z", 9)]).value_range(),
            Some((0, 9))
        );
    }

    #[test]
    fn test_resolve_relative_to_root() {
        let manifest = Manifest::builtin();
        let generator = Generator::new(&manifest, "/src/librocksdb_sys");
        assert_eq!(
            generator.resolve(Path::new("../rocksdb/statistics.h")),
            PathBuf::from("/src/librocksdb_sys/../rocksdb/statistics.h")
        );
        assert_eq!(
            generator.resolve(Path::new("/abs/statistics.h")),
            PathBuf::from("/abs/statistics.h")
        );
    }
}
