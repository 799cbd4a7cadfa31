//! Browser-path to mirror-URL resolution.
//!
//! Maps the host page's location pathname to the raw Markdown document
//! backing it on the mirror. Resolution is a pure function over an ordered
//! rule table: the first rule whose pattern matches the normalized relative
//! path wins, and a catch-all ensures every input maps to some URL.
//!
//! The guide sub-tree (`zh/guide/`) carries its own table because the mirror
//! re-roots it under `guide/` and maps its section directories onto fixed
//! index documents.

use crate::config;

/// Match predicate of a mapping rule.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Path equals the string exactly.
    Exact(&'static str),
    /// Path starts with the string.
    Prefix(&'static str),
    /// Path ends with the string.
    Suffix(&'static str),
    /// Always matches. Placed last as the table's catch-all.
    Any,
}

impl Pattern {
    fn matches(self, path: &str) -> bool {
        match self {
            Pattern::Exact(s) => path == s,
            Pattern::Prefix(s) => path.starts_with(s),
            Pattern::Suffix(s) => path.ends_with(s),
            Pattern::Any => true,
        }
    }
}

/// Rewrite applied to a path once its rule matched.
#[derive(Debug, Clone, Copy)]
enum Transform {
    /// Strip the guide prefix and resolve the remainder against
    /// [`GUIDE_RULES`], re-rooted under the mirror's guide directory.
    GuideSubtree,
    /// Append the index document to a directory path.
    DirectoryIndex,
    /// Path already names a Markdown document; keep it as is.
    Keep,
    /// Replace the trailing page extension with the Markdown extension.
    PageToMarkdown,
    /// Append the Markdown extension to a bare slug.
    AppendMarkdown,
    /// Map to a fixed mirror-relative document.
    Fixed(&'static str),
}

/// One (predicate, transform) pair of the resolution table.
#[derive(Debug, Clone, Copy)]
struct MappingRule {
    /// Stable rule name, recorded in diagnostics and asserted in tests.
    name: &'static str,
    pattern: Pattern,
    transform: Transform,
}

/// Rules for paths under the site mount, tried in order.
const PAGE_RULES: &[MappingRule] = &[
    MappingRule {
        name: "guide",
        pattern: Pattern::Prefix(config::GUIDE_PREFIX),
        transform: Transform::GuideSubtree,
    },
    MappingRule {
        name: "directory-index",
        pattern: Pattern::Suffix("/"),
        transform: Transform::DirectoryIndex,
    },
    MappingRule {
        name: "markdown-passthrough",
        pattern: Pattern::Suffix(config::MARKDOWN_EXTENSION),
        transform: Transform::Keep,
    },
    MappingRule {
        name: "page-extension",
        pattern: Pattern::Suffix(config::PAGE_EXTENSION),
        transform: Transform::PageToMarkdown,
    },
    MappingRule {
        name: "bare-slug",
        pattern: Pattern::Any,
        transform: Transform::AppendMarkdown,
    },
];

/// Rules for the guide sub-tree, applied to the path after the guide prefix.
///
/// The section-directory entries are an exception list mirrored from the
/// upstream repository layout; they must not be generalized.
const GUIDE_RULES: &[MappingRule] = &[
    MappingRule {
        name: "guide:page",
        pattern: Pattern::Suffix(config::PAGE_EXTENSION),
        transform: Transform::PageToMarkdown,
    },
    MappingRule {
        name: "guide:template-index",
        pattern: Pattern::Suffix("framework/template/"),
        transform: Transform::Fixed("framework/template/index.md"),
    },
    MappingRule {
        name: "guide:section-index",
        pattern: Pattern::Exact(""),
        transform: Transform::Fixed("start/index.md"),
    },
    MappingRule {
        name: "guide:section-index",
        pattern: Pattern::Suffix("/"),
        transform: Transform::Fixed("start/index.md"),
    },
    MappingRule {
        name: "guide:markdown",
        pattern: Pattern::Suffix(config::MARKDOWN_EXTENSION),
        transform: Transform::Keep,
    },
    MappingRule {
        name: "guide:slug",
        pattern: Pattern::Any,
        transform: Transform::AppendMarkdown,
    },
];

/// Outcome of resolving a browser path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Absolute URL of the source document on the mirror.
    pub url: String,
    /// Name of the mapping rule that produced the URL.
    pub rule: &'static str,
    /// True when the path missed the site mount entirely and the resolver
    /// degraded to the home document instead of failing.
    pub fallback: bool,
}

impl Resolution {
    fn home(rule: &'static str, fallback: bool) -> Self {
        Self {
            url: join(config::INDEX_DOC),
            rule,
            fallback,
        }
    }
}

/// Resolves a browser location pathname to the mirror document behind it.
///
/// Total over arbitrary input: paths outside the site mount degrade to the
/// home document (flagged via [`Resolution::fallback`]) rather than failing.
pub fn resolve(path: &str) -> Resolution {
    let Some(rest) = path.strip_prefix(config::SITE_MOUNT_PREFIX) else {
        return Resolution::home("home-fallback", true);
    };
    if rest.is_empty() || rest == "/" {
        return Resolution::home("home", false);
    }
    // A path like `/vela/quickapps` shares the prefix without being under
    // the mount; treat it like any other foreign path.
    let Some(relative) = rest.strip_prefix('/') else {
        return Resolution::home("home-fallback", true);
    };

    let (doc, rule) = rewrite(PAGE_RULES, relative);
    Resolution {
        url: join(&doc),
        rule,
        fallback: false,
    }
}

/// Convenience wrapper returning only the resolved URL.
pub fn resolve_doc_url(path: &str) -> String {
    resolve(path).url
}

fn join(relative: &str) -> String {
    format!("{}/{}", config::MIRROR_BASE_URL, relative)
}

fn rewrite(rules: &[MappingRule], path: &str) -> (String, &'static str) {
    let rule = rules
        .iter()
        .find(|rule| rule.pattern.matches(path))
        .expect("rule tables end with a catch-all");

    let doc = match rule.transform {
        Transform::GuideSubtree => {
            let remainder = path.strip_prefix(config::GUIDE_PREFIX).unwrap_or(path);
            let (inner, name) = rewrite(GUIDE_RULES, remainder);
            return (format!("{}{}", config::GUIDE_MOUNT, inner), name);
        }
        Transform::DirectoryIndex => format!("{}{}", path, config::INDEX_DOC),
        Transform::Keep => path.to_owned(),
        Transform::PageToMarkdown => {
            let stem = path.strip_suffix(config::PAGE_EXTENSION).unwrap_or(path);
            format!("{}{}", stem, config::MARKDOWN_EXTENSION)
        }
        Transform::AppendMarkdown => format!("{}{}", path, config::MARKDOWN_EXTENSION),
        Transform::Fixed(doc) => doc.to_owned(),
    };
    (doc, rule.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(relative: &str) -> String {
        format!("{}/{}", config::MIRROR_BASE_URL, relative)
    }

    #[test]
    fn home_with_and_without_trailing_slash() {
        for path in ["/vela/quickapp", "/vela/quickapp/"] {
            let res = resolve(path);
            assert_eq!(res.url, url("index.md"));
            assert_eq!(res.rule, "home");
            assert!(!res.fallback);
        }
    }

    #[test]
    fn foreign_path_degrades_to_home() {
        for path in ["", "/", "/other/site/page.html", "/vela/quickapps"] {
            let res = resolve(path);
            assert_eq!(res.url, url("index.md"), "path {:?}", path);
            assert_eq!(res.rule, "home-fallback");
            assert!(res.fallback);
        }
    }

    #[test]
    fn page_extension_is_replaced() {
        let res = resolve("/vela/quickapp/zh/components/button.html");
        assert_eq!(res.url, url("zh/components/button.md"));
        assert_eq!(res.rule, "page-extension");
    }

    #[test]
    fn page_extension_replaced_only_at_the_end() {
        // The extension swap must touch the suffix, not the first occurrence.
        let res = resolve("/vela/quickapp/zh/about.html.html");
        assert_eq!(res.url, url("zh/about.html.md"));
    }

    #[test]
    fn directory_gets_index_document() {
        let res = resolve("/vela/quickapp/zh/components/");
        assert_eq!(res.url, url("zh/components/index.md"));
        assert_eq!(res.rule, "directory-index");
    }

    #[test]
    fn bare_slug_gets_markdown_extension() {
        let res = resolve("/vela/quickapp/zh/changelog");
        assert_eq!(res.url, url("zh/changelog.md"));
        assert_eq!(res.rule, "bare-slug");
    }

    #[test]
    fn markdown_path_is_not_double_suffixed() {
        let res = resolve("/vela/quickapp/zh/changelog.md");
        assert_eq!(res.url, url("zh/changelog.md"));
        assert_eq!(res.rule, "markdown-passthrough");
    }

    #[test]
    fn guide_page_is_rerooted() {
        let res = resolve("/vela/quickapp/zh/guide/start.html");
        assert_eq!(res.url, url("guide/start.md"));
        assert_eq!(res.rule, "guide:page");
    }

    #[test]
    fn nested_guide_page_keeps_its_directory() {
        let res = resolve("/vela/quickapp/zh/guide/start/use-ide.html");
        assert_eq!(res.url, url("guide/start/use-ide.md"));
    }

    #[test]
    fn guide_root_maps_to_start_index() {
        let res = resolve("/vela/quickapp/zh/guide/");
        assert_eq!(res.url, url("guide/start/index.md"));
        assert_eq!(res.rule, "guide:section-index");
    }

    #[test]
    fn guide_directory_maps_to_start_index() {
        let res = resolve("/vela/quickapp/zh/guide/widgets/");
        assert_eq!(res.url, url("guide/start/index.md"));
        assert_eq!(res.rule, "guide:section-index");
    }

    #[test]
    fn template_directory_keeps_its_own_index() {
        let res = resolve("/vela/quickapp/zh/guide/framework/template/");
        assert_eq!(res.url, url("guide/framework/template/index.md"));
        assert_eq!(res.rule, "guide:template-index");
    }

    #[test]
    fn guide_slug_gets_markdown_extension() {
        let res = resolve("/vela/quickapp/zh/guide/notes");
        assert_eq!(res.url, url("guide/notes.md"));
        assert_eq!(res.rule, "guide:slug");
    }

    #[test]
    fn guide_markdown_path_is_not_double_suffixed() {
        let res = resolve("/vela/quickapp/zh/guide/notes.md");
        assert_eq!(res.url, url("guide/notes.md"));
        assert_eq!(res.rule, "guide:markdown");
    }

    #[test]
    fn guide_without_trailing_slash_is_not_the_subtree() {
        // `zh/guide` (no slash) misses the guide prefix and resolves like a slug.
        let res = resolve("/vela/quickapp/zh/guide");
        assert_eq!(res.url, url("zh/guide.md"));
        assert_eq!(res.rule, "bare-slug");
    }

    #[test]
    fn resolution_is_total_over_junk_input() {
        for path in ["///", "?!", "/vela/quickapp/\u{0}", "no-slash", "⌘"] {
            let res = resolve(path);
            assert!(
                res.url.starts_with(config::MIRROR_BASE_URL),
                "path {:?} resolved to {:?}",
                path,
                res.url
            );
        }
    }

    #[test]
    fn resolve_doc_url_matches_full_resolution() {
        let path = "/vela/quickapp/zh/guide/start/use-ide.html";
        assert_eq!(resolve_doc_url(path), resolve(path).url);
    }
}
