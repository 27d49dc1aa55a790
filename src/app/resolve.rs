//! Navigation target resolution.

use serde::Serialize;

use crate::domain::Role;

/// Where selecting a nav item leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NavTarget {
    /// Scroll to a section on the current page.
    Section { id: String, index: usize },
    /// Load another page.
    Page { url: String },
}

/// Resolves `href` against the sections present on the page.
///
/// An anchor whose section exists scrolls in place. An anchor without a
/// section loads the role's page for it. Anything else is a URL and is
/// followed as is; a bare `#` goes to the role's dashboard.
///
/// ```
/// use campusnav::app::resolve::{resolve, NavTarget};
/// use campusnav::domain::Role;
///
/// let sections = vec!["dashboard".to_string(), "marks".to_string()];
/// assert_eq!(
///     resolve("#marks", Role::Student, &sections),
///     NavTarget::Section { id: "marks".into(), index: 1 },
/// );
/// assert_eq!(
///     resolve("#attendance", Role::Student, &sections),
///     NavTarget::Page { url: "student-attendance.html".into() },
/// );
/// ```
#[must_use]
pub fn resolve(href: &str, role: Role, sections: &[String]) -> NavTarget {
    let Some(anchor) = href.strip_prefix('#') else {
        return NavTarget::Page { url: href.to_string() };
    };

    if anchor.is_empty() {
        return NavTarget::Page {
            url: role.dashboard_page(),
        };
    }

    match sections.iter().position(|id| id == anchor) {
        Some(index) => NavTarget::Section {
            id: anchor.to_string(),
            index,
        },
        None => NavTarget::Page {
            url: format!("{}-{anchor}.html", role.as_str()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_urls_pass_through() {
        assert_eq!(
            resolve("profile.html", Role::Admin, &[]),
            NavTarget::Page { url: "profile.html".into() }
        );
    }

    #[test]
    fn bare_hash_goes_to_dashboard() {
        assert_eq!(
            resolve("#", Role::Teacher, &[]),
            NavTarget::Page { url: "teacher-dashboard.html".into() }
        );
    }
}
