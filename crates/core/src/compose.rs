//! Combining per-article slide groups into one deck.

use crate::types::{ContentBlock, LogicalSlide};

/// Title of the separator slide between articles.
pub const SEPARATOR_TITLE: &str = "📚 Next Topic";

/// Title of the closing quiz slide.
pub const QUIZ_TITLE: &str = "📱 Take the Quiz!";

/// Concatenate article groups, separating consecutive articles and closing
/// with a quiz slide when a link is given. Empty groups are skipped.
pub fn compose_deck(groups: &[Vec<LogicalSlide>], quiz_link: Option<&str>) -> Vec<LogicalSlide> {
    let mut deck = Vec::new();

    for group in groups.iter().filter(|g| !g.is_empty()) {
        if !deck.is_empty() {
            deck.push(separator_slide());
        }
        deck.extend(group.iter().cloned());
    }

    if let Some(link) = quiz_link.map(str::trim).filter(|l| !l.is_empty()) {
        deck.push(quiz_slide(link));
    }

    log::debug!("Composed deck of {} logical slides from {} groups", deck.len(), groups.len());
    deck
}

/// Slide inserted between two articles.
pub fn separator_slide() -> LogicalSlide {
    LogicalSlide::new(SEPARATOR_TITLE)
        .with_block(ContentBlock::bullet(
            "Exploring another critical aspect of current affairs.",
        ))
        .with_block(ContentBlock::bullet(
            "Building comprehensive understanding of the policy landscape.",
        ))
        .with_keywords(["Transition", "Policy", "Current Affairs"])
}

/// Closing slide with a QR code linking to a quiz.
pub fn quiz_slide(link: &str) -> LogicalSlide {
    LogicalSlide::new(QUIZ_TITLE)
        .with_blocks([
            ContentBlock::bullet("Scan the QR code below to access the interactive quiz"),
            ContentBlock::bullet("Test your understanding of the topics covered"),
            ContentBlock::bullet("Get instant feedback on your answers"),
            ContentBlock::qr_code(link),
            ContentBlock::bullet(format!("Quiz Link: {}", link)),
        ])
        .with_keywords(["Quiz", "Interactive", "Assessment", "QR Code"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockKind;

    fn group(titles: &[&str]) -> Vec<LogicalSlide> {
        titles.iter().map(|t| LogicalSlide::new(*t)).collect()
    }

    fn titles(deck: &[LogicalSlide]) -> Vec<&str> {
        deck.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_separators_between_groups() {
        let deck = compose_deck(&[group(&["A1", "A2"]), group(&[]), group(&["B1"])], None);
        assert_eq!(titles(&deck), vec!["A1", "A2", SEPARATOR_TITLE, "B1"]);
    }

    #[test]
    fn test_leading_empty_group_gets_no_separator() {
        let deck = compose_deck(&[group(&[]), group(&["B1"])], None);
        assert_eq!(titles(&deck), vec!["B1"]);
    }

    #[test]
    fn test_quiz_slide_appended() {
        let deck = compose_deck(&[group(&["A1"])], Some("https://quiz.example/7"));
        let quiz = deck.last().unwrap();

        assert_eq!(quiz.title, QUIZ_TITLE);
        assert_eq!(quiz.blocks.len(), 5);
        assert_eq!(quiz.blocks[3].kind, BlockKind::QrCode);
        assert_eq!(quiz.blocks[3].text, "https://quiz.example/7");
        assert_eq!(quiz.blocks[4].text, "Quiz Link: https://quiz.example/7");
    }

    #[test]
    fn test_blank_quiz_link_is_ignored() {
        let deck = compose_deck(&[group(&["A1"])], Some("  "));
        assert_eq!(titles(&deck), vec!["A1"]);
    }

    #[test]
    fn test_all_empty_groups_give_empty_deck() {
        assert!(compose_deck(&[group(&[]), group(&[])], None).is_empty());
    }
}
