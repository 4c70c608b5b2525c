//! Writes the `.mmp` project descriptor of a buildable target

use std::path::Path;

use crate::domain::target::TargetKind;
use crate::generator::error::GenerationError;
use crate::generator::format::{
    relative_to, replace_semicolons_with_spaces, with_lib_suffix, DescriptorWriter,
};
use crate::generator::{resources, GenerationContext};
use crate::project_model::target::TargetModel;
use crate::utils::constants::{mmp::GENERIC_OPTIONS, properties};

/// Serializes a buildable target. Sections are written in the order that the
/// Symbian toolchain documents them: identity, options, macros, resources,
/// includes, sources and libraries
pub fn write_mmp(
    target: &TargetModel<'_>,
    ctx: &GenerationContext<'_>,
) -> Result<String, GenerationError> {
    let base = target.output_dir.as_path();
    let mut mmp = DescriptorWriter::default();

    write_target_type(target, ctx, &mut mmp)?;
    for option in GENERIC_OPTIONS {
        add_generic_option(target, ctx, option, &mut mmp);
    }
    mmp.blank_line();

    add_definitions(target, ctx, &mut mmp);
    resources::add_resources(&target.resources, base, &mut mmp);
    add_includes(ctx, base, &mut mmp);
    add_sources(target, ctx, base, &mut mmp);

    if target.kind != TargetKind::StaticLibrary {
        add_libraries(target, &mut mmp);
    }

    Ok(mmp.into_contents())
}

/// The explicit override wins over the type derived from the kind of the target
fn resolve_target_type<'c>(
    target: &'c TargetModel<'_>,
    ctx: &'c GenerationContext<'_>,
) -> Result<&'c str, GenerationError> {
    ctx.symbian_override(&target.name, properties::TARGETTYPE)
        .or_else(|| target.kind.default_target_type())
        .filter(|target_type| !target_type.is_empty())
        .ok_or_else(|| GenerationError::UnresolvedTargetType {
            target: target.name.to_string(),
            kind: target.kind,
        })
}

fn write_target_type(
    target: &TargetModel<'_>,
    ctx: &GenerationContext<'_>,
    mmp: &mut DescriptorWriter,
) -> Result<(), GenerationError> {
    let target_type = resolve_target_type(target, ctx)?;
    log::trace!("Target {} has the TARGETTYPE: {target_type}", target.name);

    mmp.keyword_line("TARGET", &format!("{}.{target_type}", target.name));
    mmp.keyword_line("TARGETTYPE", target_type);
    Ok(())
}

fn add_generic_option(
    target: &TargetModel<'_>,
    ctx: &GenerationContext<'_>,
    option: &str,
    mmp: &mut DescriptorWriter,
) {
    if let Some(value) = ctx.symbian_override(&target.name, option) {
        mmp.keyword_line(option, &replace_semicolons_with_spaces(value));
    }
}

fn add_definitions(target: &TargetModel<'_>, ctx: &GenerationContext<'_>, mmp: &mut DescriptorWriter) {
    let project_macros = write_macros(ctx.compile_definitions(), mmp);
    let target_macros = write_macros(target.compile_definitions(), mmp);

    if project_macros || target_macros {
        mmp.blank_line();
    }
}

/// Returns whether there was something to write
fn write_macros(macros: Option<&str>, mmp: &mut DescriptorWriter) -> bool {
    match macros {
        Some(values) if !values.is_empty() => {
            mmp.keyword_line("MACRO", &replace_semicolons_with_spaces(values));
            true
        }
        _ => false,
    }
}

fn add_includes(ctx: &GenerationContext<'_>, base: &Path, mmp: &mut DescriptorWriter) {
    let includes = ctx.include_dirs();
    for include in includes {
        mmp.keyword_line("SYSTEMINCLUDE", &relative_to(include, base));
    }

    if !includes.is_empty() {
        mmp.blank_line();
    }
}

fn add_sources(
    target: &TargetModel<'_>,
    ctx: &GenerationContext<'_>,
    base: &Path,
    mmp: &mut DescriptorWriter,
) {
    let mut written = 0;
    for source in target.sources.iter().filter(|src| !ctx.is_header(src)) {
        mmp.keyword_line("SOURCE", &relative_to(&source.path, base));
        written += 1;
    }
    log::trace!("Target {} declares {written} translation units", target.name);

    if written > 0 {
        mmp.blank_line();
    }
}

fn add_libraries(target: &TargetModel<'_>, mmp: &mut DescriptorWriter) {
    for library in &target.libraries {
        mmp.keyword_line(library.kind.keyword(), &with_lib_suffix(&library.name));
    }

    if !target.libraries.is_empty() {
        mmp.blank_line();
    }
}
