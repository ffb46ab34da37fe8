//! Text rendering of the dashboard.
//!
//! Rendering is a pure function of the session: it reads the load state,
//! the filters and the visible subset and never mutates anything.

use std::fmt::{self, Write};

use staff_attributes::{Department, Rating};

use crate::domain::{CardAction, DashboardSession, FilterState, LoadState, UserRecord};

/// Dashboard title.
pub const TITLE: &str = "Employee Performance Dashboard";
/// Line shown while the working set is loading.
pub const LOADING: &str = "Loading users...";
/// Search line content when no query is set.
pub const SEARCH_PLACEHOLDER: &str = "Search by name, email, or department";

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Write one complete frame for `session`.
///
/// # Errors
///
/// Propagates failures of the underlying writer.
pub fn write_frame<W: Write>(out: &mut W, session: &DashboardSession) -> fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(TITLE.chars().count()))?;
    writeln!(out)?;

    match session.state() {
        LoadState::Loading => writeln!(out, "{LOADING}"),
        LoadState::Failed { reason } => {
            writeln!(out, "Failed to load users: {reason}")?;
            writeln!(out, "Type `reload` to try again.")
        }
        LoadState::Ready => write_ready(out, session),
    }
}

/// Render a frame into a new string.
pub fn render_frame(session: &DashboardSession) -> String {
    Frame(session).to_string()
}

struct Frame<'a>(&'a DashboardSession);

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_frame(f, self.0)
    }
}

fn write_ready<W: Write>(out: &mut W, session: &DashboardSession) -> fmt::Result {
    let filters = session.filters();
    write_search(out, filters)?;
    writeln!(out)?;
    write_department_panel(out, filters)?;
    write_rating_panel(out, filters)?;
    writeln!(out)?;

    let visible = session.visible();
    if visible.is_empty() {
        writeln!(out, "No users match the current filters.")?;
        writeln!(out)?;
    }
    for user in &visible {
        write_card(out, user)?;
        writeln!(out)?;
    }
    writeln!(
        out,
        "Showing {} of {} users",
        visible.len(),
        session.users().len()
    )
}

fn write_search<W: Write>(out: &mut W, filters: &FilterState) -> fmt::Result {
    if filters.query().is_empty() {
        writeln!(out, "Search: [{SEARCH_PLACEHOLDER}]")
    } else {
        writeln!(out, "Search: \"{}\"", filters.query())
    }
}

fn write_department_panel<W: Write>(out: &mut W, filters: &FilterState) -> fmt::Result {
    write!(out, "Filter by Department:")?;
    for department in Department::ALL {
        write!(
            out,
            " {}{}",
            marker(filters.is_department_selected(department)),
            department
        )?;
    }
    writeln!(out)
}

fn write_rating_panel<W: Write>(out: &mut W, filters: &FilterState) -> fmt::Result {
    write!(out, "Filter by Rating:")?;
    for rating in Rating::all() {
        write!(
            out,
            " {}{}",
            marker(filters.is_rating_selected(rating)),
            rating
        )?;
    }
    writeln!(out)
}

const fn marker(selected: bool) -> &'static str {
    if selected { "[x] " } else { "[ ] " }
}

fn write_card<W: Write>(out: &mut W, user: &UserRecord) -> fmt::Result {
    writeln!(out, "#{} {}", user.id(), user.full_name())?;
    writeln!(out, "    {}", user.email())?;
    writeln!(out, "    Age: {}", user.age())?;
    writeln!(out, "    <{}>  {}", user.department(), stars(user.rating()))?;
    write!(out, "   ")?;
    for action in CardAction::ALL {
        write!(out, " [{action}]")?;
    }
    writeln!(out)
}

/// Five-star rendering of `rating`, filled stars first.
pub fn stars(rating: Rating) -> String {
    (Rating::MIN..=Rating::MAX)
        .map(|point| {
            if point <= rating.get() {
                FILLED_STAR
            } else {
                EMPTY_STAR
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ports::UserDirectoryError;
    use crate::domain::test_support::{ann_and_bob, rating_of};

    #[fixture]
    fn ready() -> DashboardSession {
        let mut session = DashboardSession::default();
        let ticket = session.begin_load();
        session.finish_load(ticket, Ok(ann_and_bob()));
        session
    }

    #[test]
    fn loading_frame_shows_only_the_indicator() {
        let frame = render_frame(&DashboardSession::default());
        assert!(frame.starts_with(TITLE));
        assert!(frame.contains(LOADING));
        assert!(!frame.contains("Showing"));
        assert!(!frame.contains("Filter by"));
    }

    #[test]
    fn failed_frame_shows_reason_and_reload_hint() {
        let mut session = DashboardSession::default();
        let ticket = session.begin_load();
        session.finish_load(ticket, Err(UserDirectoryError::timeout("10s elapsed")));

        let frame = render_frame(&session);
        assert!(frame.contains("Failed to load users: user directory timeout: 10s elapsed"));
        assert!(frame.contains("reload"));
        assert!(!frame.contains(LOADING));
    }

    #[rstest]
    fn ready_frame_renders_every_section(ready: DashboardSession) {
        let frame = render_frame(&ready);

        assert!(frame.contains(&format!("Search: [{SEARCH_PLACEHOLDER}]")));
        assert!(frame.contains(
            "Filter by Department: [ ] HR [ ] Engineering [ ] Sales [ ] Marketing [ ] Finance [ ] Support"
        ));
        assert!(frame.contains("Filter by Rating: [ ] 1 [ ] 2 [ ] 3 [ ] 4 [ ] 5"));
        assert!(frame.contains("#1 Ann Smith"));
        assert!(frame.contains("    ann@example.test"));
        assert!(frame.contains("    Age: 30"));
        assert!(frame.contains("<HR>  ★★★☆☆"));
        assert!(frame.contains("<Sales>  ★★★★★"));
        assert!(frame.contains("[View] [Bookmark] [Promote]"));
        assert!(frame.ends_with("Showing 2 of 2 users\n"));
    }

    #[rstest]
    fn selections_and_query_are_marked(mut ready: DashboardSession) {
        ready.set_search("bob");
        ready.toggle_department(Department::Sales);
        ready.toggle_rating(rating_of(5));

        let frame = render_frame(&ready);
        assert!(frame.contains("Search: \"bob\""));
        assert!(frame.contains("[x] Sales"));
        assert!(frame.contains("[ ] HR"));
        assert!(frame.contains("[x] 5"));
        assert!(!frame.contains("#1 Ann Smith"));
        assert!(frame.contains("Showing 1 of 2 users"));
    }

    #[rstest]
    fn empty_result_says_so(mut ready: DashboardSession) {
        ready.set_search("nobody");
        let frame = render_frame(&ready);
        assert!(frame.contains("No users match the current filters."));
        assert!(frame.contains("Showing 0 of 2 users"));
    }

    #[rstest]
    #[case(1, "★☆☆☆☆")]
    #[case(3, "★★★☆☆")]
    #[case(5, "★★★★★")]
    fn stars_fill_one_per_point(#[case] value: u8, #[case] expected: &str) {
        assert_eq!(stars(rating_of(value)), expected);
    }
}
