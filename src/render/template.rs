//! Per-item template and token substitution.

/// Built-in per-item template. Each `%name%` marker is replaced verbatim
/// during substitution; the `template` hook may swap the whole string.
pub const DEFAULT_TEMPLATE: &str = r#"<section class="item page-%post_id% thumbnail-size-%thumbnail_size%">
 <a class="item-wrap" href="%post_url%">
  <div class="post-thumbnail">%post_thumbnail%</div>
  <div class="post-content">
   <h3 class="post-title">%post_title%</h3>
   %post_excerpt%
  </div>
 </a>
</section>"#;

/// Replace every known `%name%` marker in a single left-to-right pass.
///
/// Substituted values are emitted directly and never rescanned, so a value
/// containing marker-like text cannot trigger a second substitution. Unknown
/// markers and lone `%` characters pass through unchanged.
pub fn substitute(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find('%') {
            Some(end) => {
                let name = &after[..end];
                if let Some((_, value)) = values.iter().find(|(k, _)| *k == name) {
                    out.push_str(value);
                    rest = &after[end + 1..];
                } else {
                    out.push('%');
                    rest = after;
                }
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
