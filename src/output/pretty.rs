use colored::Colorize;

use crate::core::{SprintPlan, Story};

fn story_line(story: &Story) -> String {
    format!(
        "  {}  {}  {}",
        story.id().bold(),
        format!("Pr{}", story.priority()).cyan(),
        format!("{} pts", story.points()).yellow()
    )
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "story"
    } else {
        "stories"
    }
}

/// Format a list of stories as a pretty table
pub fn format_stories_pretty(stories: &[Story], title: &str) -> String {
    if stories.is_empty() {
        return format!("{title} (0 stories)\n  No stories");
    }

    let mut output = format!("{title} ({} {})\n", stories.len(), plural(stories.len()));
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for story in stories {
        output.push_str(&story_line(story));
        output.push('\n');
    }

    output
}

/// Format a single story after an action
pub fn format_story_pretty(story: &Story, action: &str) -> String {
    format!("{} {}", format!("{action}:").green(), story)
}

/// Format a sprint plan
pub fn format_sprint_pretty(plan: &SprintPlan) -> String {
    let title = format!("Sprint (capacity {})", plan.capacity);
    let mut output = format_stories_pretty(&plan.stories, &title);

    if !plan.is_empty() {
        output.push_str(&"─".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "  {} {} committed, {} remaining",
            "Total:".dimmed(),
            plan.committed_points,
            plan.remaining_points()
        ));
    }

    output
}
