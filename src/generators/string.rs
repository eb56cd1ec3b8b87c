//! Localized string generator.
//!
//! Each table becomes a nested group; each key becomes a member whose
//! format arguments come from the development language value.

use crate::namespace::{Fragment, Group, Member, Payload, ResourceKind, StringPayload};
use crate::resources::StringTable;

use super::format::parse_format_args;

pub fn generate(tables: &[StringTable], development_language: &str) -> Fragment {
    let mut fragment = Fragment::new(ResourceKind::String);

    for table in tables {
        let mut group = Group::new(&table.name)
            .with_origin(ResourceKind::String)
            .with_source(table.source.clone());

        for entry in &table.entries {
            let value = entry.value_for(development_language).map(str::to_string);
            let args = value.as_deref().map(parse_format_args).unwrap_or_default();

            let payload = StringPayload {
                table: table.name.clone(),
                key: entry.key.clone(),
                locales: entry.locales().into_iter().map(str::to_string).collect(),
                args,
                value,
                comment: entry.comment.clone(),
            };
            group.push_member(
                Member::new(&entry.key, ResourceKind::String, Payload::String(payload))
                    .with_source(table.source.clone()),
            );
        }

        fragment.group.push_group(group);
    }

    fragment
}
