//! Role and permission data for the account-setup step.
//!
//! All strings are translation keys, resolved at render time. The role
//! examples and the feature matrix below are maintained independently: the
//! matrix is a literal comparison table, not derived from the examples.

/// One illustrated permission example attached to a role. Rendered with an
/// exhaustive match, one layout per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionExample {
    /// Bullet list of things the role can do.
    Checklist {
        title_key: &'static str,
        item_keys: &'static [&'static str],
    },
    /// Short tags naming areas the role can access.
    Tags {
        title_key: &'static str,
        tag_keys: &'static [&'static str],
    },
    /// Numbered flow, optionally with a footnote.
    Process {
        title_key: &'static str,
        step_keys: &'static [&'static str],
        note_key: Option<&'static str>,
    },
}

/// A workspace role with its illustrated permissions.
#[derive(Clone, Copy, Debug)]
pub struct Role {
    /// Stable key, also used as the tab id.
    pub key: &'static str,
    pub name_key: &'static str,
    pub desc_key: &'static str,
    /// Badge variant for the role heading.
    pub badge_variant: &'static str,
    pub examples: &'static [PermissionExample],
}

pub fn roles() -> &'static [Role] {
    &[
        Role {
            key: "admin",
            name_key: "role.admin",
            desc_key: "role.admin.desc",
            badge_variant: "primary",
            examples: &[
                PermissionExample::Checklist {
                    title_key: "role.admin.ex.manage.title",
                    item_keys: &[
                        "role.admin.ex.manage.item1",
                        "role.admin.ex.manage.item2",
                        "role.admin.ex.manage.item3",
                    ],
                },
                PermissionExample::Tags {
                    title_key: "role.admin.ex.access.title",
                    tag_keys: &[
                        "role.tag.all_reports",
                        "role.tag.api_keys",
                        "role.tag.billing",
                        "role.tag.members",
                    ],
                },
            ],
        },
        Role {
            key: "analyst",
            name_key: "role.analyst",
            desc_key: "role.analyst.desc",
            badge_variant: "success",
            examples: &[
                PermissionExample::Process {
                    title_key: "role.analyst.ex.flow.title",
                    step_keys: &[
                        "role.analyst.ex.flow.step1",
                        "role.analyst.ex.flow.step2",
                        "role.analyst.ex.flow.step3",
                    ],
                    note_key: Some("role.analyst.ex.flow.note"),
                },
                PermissionExample::Tags {
                    title_key: "role.analyst.ex.access.title",
                    tag_keys: &["role.tag.create_reports", "role.tag.export_data"],
                },
            ],
        },
        Role {
            key: "member",
            name_key: "role.member",
            desc_key: "role.member.desc",
            badge_variant: "neutral",
            examples: &[PermissionExample::Checklist {
                title_key: "role.member.ex.view.title",
                item_keys: &[
                    "role.member.ex.view.item1",
                    "role.member.ex.view.item2",
                    "role.member.ex.view.item3",
                ],
            }],
        },
    ]
}

/// One row of the permission-comparison table.
#[derive(Clone, Copy, Debug)]
pub struct FeatureAccess {
    pub feature_key: &'static str,
    pub admin: bool,
    pub analyst: bool,
    pub member: bool,
}

/// Literal comparison table, column order matching [`roles`].
pub fn feature_matrix() -> &'static [FeatureAccess] {
    &[
        FeatureAccess {
            feature_key: "feature.manage_members",
            admin: true,
            analyst: false,
            member: false,
        },
        FeatureAccess {
            feature_key: "feature.manage_projects",
            admin: true,
            analyst: false,
            member: false,
        },
        FeatureAccess {
            feature_key: "feature.api_keys",
            admin: true,
            analyst: false,
            member: false,
        },
        FeatureAccess {
            feature_key: "feature.create_reports",
            admin: true,
            analyst: true,
            member: false,
        },
        FeatureAccess {
            feature_key: "feature.export_data",
            admin: true,
            analyst: true,
            member: false,
        },
        FeatureAccess {
            feature_key: "feature.view_reports",
            admin: true,
            analyst: true,
            member: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_keys_are_unique() {
        let roles = roles();
        for (i, role) in roles.iter().enumerate() {
            assert!(!roles[i + 1..].iter().any(|other| other.key == role.key));
        }
    }

    #[test]
    fn test_matrix_never_grants_more_than_admin() {
        for row in feature_matrix() {
            if row.analyst || row.member {
                assert!(row.admin, "{} grants a narrower role but not admin", row.feature_key);
            }
        }
    }
}
