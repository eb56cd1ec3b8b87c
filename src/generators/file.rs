//! Generator for other bundled files.

use crate::namespace::{Fragment, Member, Payload, ResourceKind};
use crate::resources::FileRecord;

pub fn generate(files: &[FileRecord]) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::File);

    for file in files {
        let member = Member::new(
            &file.name,
            ResourceKind::File,
            Payload::File {
                name: file.stem().to_string(),
                extension: file.extension().map(str::to_string),
            },
        )
        .with_source(file.source.clone());

        fragment.group.push_member(member);
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let fragment = generate(&[FileRecord {
            name: "seed-data.json".to_string(),
            source: None,
        }]);
        let member = &fragment.group.members[0];
        assert_eq!(member.ident.as_str(), "seedDataJson");
        assert_eq!(
            member.payload,
            Payload::File {
                name: "seed-data".to_string(),
                extension: Some("json".to_string()),
            }
        );
    }
}
