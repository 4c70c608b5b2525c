//! Writes the `START RESOURCE` and `START BITMAP` blocks of a descriptor

use std::path::Path;

use crate::domain::resource::{BitmapResource, GenericResource, SymbianResource};
use crate::generator::format::{relative_to, DescriptorWriter};

/// Writes every resource of the target in declaration order. Each block
/// carries its own terminator, so no resources means no lines at all
pub fn add_resources(resources: &[SymbianResource<'_>], base: &Path, mmp: &mut DescriptorWriter) {
    for resource in resources {
        match resource {
            SymbianResource::Generic(res) => write_generic_resource(res, base, mmp),
            SymbianResource::Bitmap(bitmap) => write_bitmap(bitmap, base, mmp),
        }
    }
}

fn write_generic_resource(res: &GenericResource<'_>, base: &Path, mmp: &mut DescriptorWriter) {
    mmp.keyword_line("START RESOURCE", &relative_to(&res.source, base));

    if let Some(target) = &res.target {
        mmp.indented_keyword_line("TARGET", target);
    }
    if let Some(target_path) = &res.target_path {
        mmp.indented_keyword_line("TARGETPATH", target_path);
    }
    if res.header {
        mmp.indented_line("HEADER");
    }
    if let Some(lang) = &res.lang {
        mmp.indented_keyword_line("LANG", lang);
    }
    if let Some(uid) = &res.uid {
        mmp.indented_keyword_line("UID", uid);
    }

    end_block(mmp);
}

fn write_bitmap(bitmap: &BitmapResource<'_>, base: &Path, mmp: &mut DescriptorWriter) {
    mmp.keyword_line("START BITMAP", &bitmap.target);

    if let Some(target_path) = &bitmap.target_path {
        mmp.indented_keyword_line("TARGETPATH", target_path);
    }
    if bitmap.header {
        mmp.indented_line("HEADER");
    }

    for image in &bitmap.sources {
        let value = format!("{} {}", image.depth, relative_to(&image.file, base));
        mmp.indented_keyword_line("SOURCE", &value);
    }

    end_block(mmp);
}

fn end_block(mmp: &mut DescriptorWriter) {
    mmp.line("END");
    mmp.blank_line();
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::path::PathBuf;

    use super::*;
    use crate::domain::resource::BitmapSource;
    use crate::generator::format::keyword_with_param;

    fn render(resources: &[SymbianResource<'_>]) -> String {
        let mut mmp = DescriptorWriter::default();
        add_resources(resources, Path::new("/project/group"), &mut mmp);
        mmp.into_contents()
    }

    #[test]
    fn test_no_resources_no_lines() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_full_generic_resource() {
        let res = SymbianResource::Generic(GenericResource {
            source: PathBuf::from("/project/data/app.rss"),
            target: Some(Cow::Borrowed("app.rsc")),
            target_path: Some(Cow::Borrowed("\\resource\\apps")),
            header: true,
            lang: Some(Cow::Borrowed("SC")),
            uid: Some(Cow::Borrowed("0x1234")),
        });

        let expected = [
            format!("{}../data/app.rss", keyword_with_param("START RESOURCE")),
            format!("  {}app.rsc", keyword_with_param("TARGET")),
            format!("  {}\\resource\\apps", keyword_with_param("TARGETPATH")),
            String::from("  HEADER"),
            format!("  {}SC", keyword_with_param("LANG")),
            format!("  {}0x1234", keyword_with_param("UID")),
            String::from("END"),
            String::new(),
            String::new(),
        ]
        .join("\n");

        assert_eq!(render(&[res]), expected);
    }

    #[test]
    fn test_minimal_generic_resource_skips_unset_fields() {
        let res = SymbianResource::Generic(GenericResource {
            source: PathBuf::from("/project/data/reg.rss"),
            ..Default::default()
        });

        let expected = format!("{}../data/reg.rss\nEND\n\n", keyword_with_param("START RESOURCE"));
        assert_eq!(render(&[res]), expected);
    }

    #[test]
    fn test_bitmap_sources_keep_order_and_depth() {
        let bitmap = SymbianResource::Bitmap(BitmapResource {
            target: Cow::Borrowed("app.mbm"),
            target_path: None,
            header: true,
            sources: vec![
                BitmapSource {
                    depth: Cow::Borrowed("8"),
                    file: PathBuf::from("/project/gfx/small.bmp"),
                },
                BitmapSource {
                    depth: Cow::Borrowed("24"),
                    file: PathBuf::from("/project/gfx/big.bmp"),
                },
            ],
        });

        let rendered = render(&[bitmap]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], format!("{}app.mbm", keyword_with_param("START BITMAP")));
        assert_eq!(lines[1], "  HEADER");

        let sources: Vec<&&str> = lines
            .iter()
            .filter(|line| line.starts_with("  SOURCE"))
            .collect();
        assert_eq!(sources.len(), 2);
        assert_eq!(
            *sources[0],
            format!("  {}8 ../gfx/small.bmp", keyword_with_param("SOURCE"))
        );
        assert_eq!(
            *sources[1],
            format!("  {}24 ../gfx/big.bmp", keyword_with_param("SOURCE"))
        );
        assert!(rendered.ends_with("END\n\n"));
    }
}
