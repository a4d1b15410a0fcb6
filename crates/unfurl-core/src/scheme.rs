//! Scheme-pattern matching.
//!
//! Provider endpoints declare the URLs they resolve as scheme patterns
//! such as `https://twitter.com/*/status/*` or `spotify:*`. A `*`
//! matches any run of characters, including `/`, since patterns like
//! `https://medium.com/*` must match nested paths.

/// Match a URL against a scheme pattern.
///
/// `*` matches zero or more characters (any characters); everything
/// else matches literally and case-sensitively. The pattern is anchored
/// at both ends.
///
/// # Example
///
/// ```rust
/// use unfurl_core::scheme_matches;
///
/// assert!(scheme_matches("https://youtu.be/*", "https://youtu.be/dQw4w9WgXcQ"));
/// assert!(!scheme_matches("https://youtu.be/*", "https://vimeo.com/123"));
/// ```
pub fn scheme_matches(pattern: &str, url: &str) -> bool {
    let p = pattern.as_bytes();
    let u = url.as_bytes();

    // Iterative greedy wildcard match with backtracking to the most
    // recent `*`.
    let (mut pi, mut ui) = (0usize, 0usize);
    let mut star: Option<usize> = None;
    let mut star_ui = 0usize;

    while ui < u.len() {
        if pi < p.len() && p[pi] == b'*' {
            star = Some(pi);
            star_ui = ui;
            pi += 1;
        } else if pi < p.len() && p[pi] == u[ui] {
            pi += 1;
            ui += 1;
        } else if let Some(s) = star {
            // Extend the last wildcard by one character and retry.
            star_ui += 1;
            pi = s + 1;
            ui = star_ui;
        } else {
            return false;
        }
    }

    // Trailing pattern must be all wildcards.
    while pi < p.len() && p[pi] == b'*' {
        pi += 1;
    }
    pi == p.len()
}
