//! Text rendering utilities for human-friendly error messages.
//!
//! Provides helpers to format resolution chains, type names,
//! and helpful suggestions in error output.

/// Renders a resolution chain as a readable string.
///
/// # Examples
/// ```
/// use bindery_support::rendering::render_chain;
///
/// let chain = vec!["dyn Storage", "FileStorage", "dyn Storage"];
/// let rendered = render_chain(&chain);
/// assert_eq!(rendered, "dyn Storage → FileStorage → dyn Storage");
/// ```
pub fn render_chain(chain: &[impl AsRef<str>]) -> String {
    chain
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Renders a resolution chain using the short form of every name.
///
/// ```
/// use bindery_support::rendering::render_chain_short;
///
/// let chain = vec!["app::Config", "alloc::sync::Arc<dyn app::Logger>"];
/// assert_eq!(render_chain_short(&chain), "Config → Arc<dyn Logger>");
/// ```
pub fn render_chain_short(chain: &[impl AsRef<str>]) -> String {
    let short: Vec<String> = chain.iter().map(|s| shorten_type_name(s.as_ref())).collect();
    render_chain(&short)
}

/// Shortens a fully qualified type name for display.
///
/// Names without a path (aliases like `"mailer"`) are returned untouched.
///
/// ```
/// use bindery_support::rendering::shorten_type_name;
///
/// let short = shorten_type_name("my_app::services::user::UserService");
/// assert_eq!(short, "UserService");
///
/// let short = shorten_type_name("alloc::sync::Arc<dyn my_app::traits::Logger>");
/// assert_eq!(short, "Arc<dyn Logger>");
/// ```
pub fn shorten_type_name(full_name: &str) -> String {
    // "my_app::services::UserService" → "UserService"
    // "Arc<dyn my_app::Logger>" → "Arc<dyn Logger>"
    let mut result = String::with_capacity(full_name.len());
    let mut chars = full_name.chars().peekable();
    let mut current_segment = String::new();

    while let Some(ch) = chars.next() {
        match ch {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                current_segment.clear();
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                result.push_str(&current_segment);
                result.push(ch);
                current_segment.clear();
            }
            _ => {
                current_segment.push(ch);
            }
        }
    }

    result.push_str(&current_segment);
    result
}

/// Generates "did you mean?" suggestions based on known names.
///
/// Compares the requested name against the available ones and returns
/// at most `max_suggestions` close matches, best first. The requested
/// name itself is never suggested.
pub fn suggest_similar(
    requested: &str,
    available: &[&str],
    max_suggestions: usize,
) -> Vec<String> {
    let requested_lower = requested.to_lowercase();
    let requested_short = shorten_type_name(requested).to_lowercase();

    let mut scored: Vec<(&str, usize)> = available
        .iter()
        .filter(|&&name| name != requested)
        .filter_map(|&name| {
            let name_lower = name.to_lowercase();
            let name_short = shorten_type_name(name).to_lowercase();

            if name_lower.contains(&requested_lower)
                || requested_lower.contains(&name_lower)
            {
                return Some((name, 100));
            }

            if name_short.contains(&requested_short)
                || requested_short.contains(&name_short)
            {
                return Some((name, 80));
            }

            let common = name_short
                .chars()
                .zip(requested_short.chars())
                .take_while(|(a, b)| a == b)
                .count();

            if common >= 3 {
                return Some((name, common * 10));
            }

            None
        })
        .collect();

    // Stable order for equal scores keeps error output deterministic.
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(name, _)| name.to_string())
        .collect()
}
