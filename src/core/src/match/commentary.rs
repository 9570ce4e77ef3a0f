use crate::error::NarrativeError;
use crate::r#match::{MatchEventKind, Score};
use log::warn;

/// Everything a provider needs to narrate one event.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentaryContext<'a> {
    pub kind: MatchEventKind,
    pub minute: u8,
    pub home_club: &'a str,
    pub away_club: &'a str,
    pub acting_club: &'a str,
    pub player_name: Option<&'a str>,
    pub score: Score,
}

pub trait CommentaryProvider: Send + Sync {
    fn describe(&self, ctx: &CommentaryContext<'_>) -> Result<String, NarrativeError>;
}

/// Deterministic built-in provider and the fallback for every other one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCommentary;

impl TemplateCommentary {
    pub fn render(ctx: &CommentaryContext<'_>) -> String {
        let player = ctx.player_name.unwrap_or(ctx.acting_club);

        match ctx.kind {
            MatchEventKind::Goal => format!(
                "{}' GOAL! {} scores for {}. {} {} {}",
                ctx.minute, player, ctx.acting_club, ctx.home_club, ctx.score, ctx.away_club
            ),
            MatchEventKind::Chance => format!(
                "{}' {} gets a shot away but {} survive",
                ctx.minute,
                player,
                if ctx.acting_club == ctx.home_club {
                    ctx.away_club
                } else {
                    ctx.home_club
                }
            ),
            MatchEventKind::Card => {
                format!("{}' {} of {} is booked", ctx.minute, player, ctx.acting_club)
            }
            MatchEventKind::Commentary => format!(
                "{}' The game settles into a rhythm, {} {} {}",
                ctx.minute, ctx.home_club, ctx.score, ctx.away_club
            ),
        }
    }
}

impl CommentaryProvider for TemplateCommentary {
    fn describe(&self, ctx: &CommentaryContext<'_>) -> Result<String, NarrativeError> {
        Ok(Self::render(ctx))
    }
}

pub struct Commentary;

impl Commentary {
    pub fn describe_or_fallback(provider: &dyn CommentaryProvider, ctx: &CommentaryContext<'_>) -> String {
        match provider.describe(ctx) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("commentary: {}, using template", NarrativeError::Blank);
                TemplateCommentary::render(ctx)
            }
            Err(err) => {
                warn!("commentary: {}, using template", err);
                TemplateCommentary::render(ctx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingCommentary;

    impl CommentaryProvider for FailingCommentary {
        fn describe(&self, _: &CommentaryContext<'_>) -> Result<String, NarrativeError> {
            Err(NarrativeError::Provider("timeout".to_string()))
        }
    }

    struct BlankCommentary;

    impl CommentaryProvider for BlankCommentary {
        fn describe(&self, _: &CommentaryContext<'_>) -> Result<String, NarrativeError> {
            Ok("   ".to_string())
        }
    }

    fn ctx(kind: MatchEventKind) -> CommentaryContext<'static> {
        CommentaryContext {
            kind,
            minute: 34,
            home_club: "Emberford",
            away_club: "Stonewatch",
            acting_club: "Emberford",
            player_name: Some("Vale"),
            score: Score::new(1, 0),
        }
    }

    #[test]
    fn test_template_goal_text() {
        let text = TemplateCommentary::render(&ctx(MatchEventKind::Goal));

        assert_eq!(text, "34' GOAL! Vale scores for Emberford. Emberford 1:0 Stonewatch");
    }

    #[test]
    fn test_failing_provider_falls_back() {
        let context = ctx(MatchEventKind::Card);

        assert_eq!(
            Commentary::describe_or_fallback(&FailingCommentary, &context),
            TemplateCommentary::render(&context)
        );
    }

    #[test]
    fn test_blank_provider_falls_back() {
        let context = ctx(MatchEventKind::Chance);
        let text = Commentary::describe_or_fallback(&BlankCommentary, &context);

        assert!(text.contains("Stonewatch survive"));
    }
}
