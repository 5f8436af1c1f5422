// src/validate.rs
use std::sync::OnceLock;

use regex::Regex;

// ASCII word characters only, like the browser's `\w`.
const GITHUB_URL_PATTERN: &str =
    r"^https://github\.com/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(\.git)?$";

fn github_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(GITHUB_URL_PATTERN).expect("static pattern compiles"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRepo {
    pub owner: String,
    pub name: String,
}

impl GithubRepo {
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// True iff `url` looks like `https://github.com/<owner>/<repo>`, optionally with `.git`.
pub fn is_github_url(url: &str) -> bool {
    github_url_regex().is_match(url)
}

pub fn parse_github_url(url: &str) -> Option<GithubRepo> {
    let caps = github_url_regex().captures(url)?;
    Some(GithubRepo {
        owner: caps[1].to_string(),
        name: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_repo_with_git_suffix() {
        assert!(is_github_url("https://github.com/Rz4377/react-boiler-plate.git"));
    }

    #[test]
    fn accepts_repo_without_suffix() {
        assert!(is_github_url("https://github.com/rust-lang/rust"));
        assert!(is_github_url("https://github.com/some_org/my.repo-v2"));
    }

    #[test]
    fn rejects_wrong_scheme() {
        assert!(!is_github_url("http://github.com/a/b"));
    }

    #[test]
    fn rejects_missing_repo_segment() {
        assert!(!is_github_url("https://github.com/a"));
        assert!(!is_github_url("https://github.com/a/"));
    }

    #[test]
    fn rejects_other_hosts_and_extra_paths() {
        assert!(!is_github_url("https://gitlab.com/user/repo"));
        assert!(!is_github_url("https://www.github.com/user/repo"));
        assert!(!is_github_url("https://github.com/user/repo/tree/main"));
        assert!(!is_github_url(" https://github.com/user/repo"));
        assert!(!is_github_url(""));
    }

    #[test]
    fn rejects_non_ascii_segments() {
        assert!(!is_github_url("https://github.com/jürgen/repo"));
    }

    #[test]
    fn parse_strips_git_suffix() {
        let repo = parse_github_url("https://github.com/user/repo.git").unwrap();
        assert_eq!(
            repo,
            GithubRepo {
                owner: "user".to_string(),
                name: "repo".to_string(),
            }
        );
        assert_eq!(repo.slug(), "user/repo");
    }

    #[test]
    fn parse_keeps_dots_inside_name() {
        let repo = parse_github_url("https://github.com/acme/site.github.io").unwrap();
        assert_eq!(repo.name, "site.github.io");
    }

    #[test]
    fn parse_rejects_invalid() {
        assert_eq!(parse_github_url("https://gitlab.com/user/repo"), None);
    }
}
