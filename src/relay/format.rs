//! Builds the HTML fragments that get posted to chat.
//!
//! All interpolated values are escaped here; callers pass raw strings.
use crate::utils::text::escape_html;

const REPO_COLOR: &str = "FF00FF";
const COMMIT_ID_COLOR: &str = "606060";
const ACTOR_COLOR: &str = "909090";

/// Number of commit identifier characters shown in push lines.
const SHORT_COMMIT_ID_LEN: usize = 6;

fn repo_tag(repo_display: &str) -> String {
    format!(
        "[<font color='{REPO_COLOR}'>{}</font>]",
        escape_html(repo_display)
    )
}

fn actor_tag(actor_display: &str) -> String {
    format!(
        "<font color='{ACTOR_COLOR}'>({})</font>",
        escape_html(actor_display)
    )
}

/// One public-channel line for a single pushed commit.
pub fn push_line(repo_display: &str, commit_url: &str, commit_id: &str, message: &str, actor_display: &str) -> String {
    let short_id: String = commit_id.chars().take(SHORT_COMMIT_ID_LEN).collect();
    format!(
        "{} <a href=\"{}\"><font color='{COMMIT_ID_COLOR}'>{}</font></a> {} {}",
        repo_tag(repo_display),
        escape_html(commit_url),
        escape_html(&short_id),
        escape_html(message),
        actor_tag(actor_display),
    )
}

/// Staff-channel variant of [`push_line`]: the commit message itself is the
/// link text and the commit id is omitted.
pub fn push_staff_line(repo_display: &str, commit_url: &str, message: &str, actor_display: &str) -> String {
    format!(
        "{} <a href=\"{}\">{}</a> {}",
        repo_tag(repo_display),
        escape_html(commit_url),
        escape_html(message),
        actor_tag(actor_display),
    )
}

/// The single public-channel line for a pull request event.
pub fn pull_request_line(
    repo_display: &str,
    actor_display: &str,
    action: &str,
    url: &str,
    number: u64,
    title: &str,
) -> String {
    format!(
        "{} <font color='{ACTOR_COLOR}'>{}</font> {} <a href=\"{}\">PR#{number}</a>: {}",
        repo_tag(repo_display),
        escape_html(actor_display),
        escape_html(action),
        escape_html(url),
        escape_html(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_line_snapshot() {
        insta::assert_snapshot!(
            push_line(
                "server",
                "https://github.com/example/server/commit/1a2b3c4d5e6f",
                "1a2b3c4d5e6f",
                "Fix move order…",
                "Jane"
            ),
            @r#"[<font color='FF00FF'>server</font>] <a href="https://github.com/example/server/commit/1a2b3c4d5e6f"><font color='606060'>1a2b3c</font></a> Fix move order… <font color='909090'>(Jane)</font>"#
        );
    }

    #[test]
    fn push_staff_line_snapshot() {
        insta::assert_snapshot!(
            push_staff_line(
                "server",
                "https://github.com/example/server/commit/1a2b3c4d5e6f",
                "Fix move order…",
                "Jane"
            ),
            @r#"[<font color='FF00FF'>server</font>] <a href="https://github.com/example/server/commit/1a2b3c4d5e6f">Fix move order…</a> <font color='909090'>(Jane)</font>"#
        );
    }

    #[test]
    fn pull_request_line_snapshot() {
        insta::assert_snapshot!(
            pull_request_line(
                "client",
                "janedoe",
                "updated",
                "https://git.io/abcdef",
                1234,
                "Rework the teambuilder"
            ),
            @r#"[<font color='FF00FF'>client</font>] <font color='909090'>janedoe</font> updated <a href="https://git.io/abcdef">PR#1234</a>: Rework the teambuilder"#
        );
    }

    #[test]
    fn user_controlled_fields_are_escaped() {
        let line = pull_request_line(
            "<repo>",
            "jane&doe",
            "opened",
            "https://example.com/?a=1&b=2",
            1,
            "<script>alert('hi')</script>",
        );
        assert!(!line.contains("<script>"));
        assert!(line.contains("&lt;script&gt;alert(&#39;hi&#39;)&lt;/script&gt;"));
        assert!(line.contains("[<font color='FF00FF'>&lt;repo&gt;</font>]"));
        assert!(line.contains("jane&amp;doe"));
        assert!(line.contains("https://example.com/?a=1&amp;b=2"));
    }

    #[test]
    fn short_commit_id_is_six_characters() {
        let line = push_line("r", "u", "abcdef123456", "m", "a");
        assert!(line.contains(">abcdef</font>"));
        assert!(!line.contains("abcdef1"));
    }
}
