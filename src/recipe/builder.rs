//! Head / middle / tail stage-list assembly

use crate::registry::StageConfig;

/// Where a stage goes in the assembled list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Head,
    Middle,
    Tail,
}

/// Collects stage configs into three ordered lists
///
/// The assembled list is `head ++ middle ++ tail`. New head entries are
/// prepended, so the head runs in reverse insertion order; middle and tail
/// entries are appended. Within each list a stage name appears at most once:
/// inserting a name that is already there keeps the existing entry, or
/// overwrites it in place when `force_replace` is set. Entries never move
/// once placed.
#[derive(Debug, Clone, Default)]
pub struct StageListBuilder {
    head: Vec<StageConfig>,
    middle: Vec<StageConfig>,
    tail: Vec<StageConfig>,
}

impl StageListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        placement: Placement,
        config: StageConfig,
        force_replace: bool,
    ) -> &mut Self {
        let list = match placement {
            Placement::Head => &mut self.head,
            Placement::Middle => &mut self.middle,
            Placement::Tail => &mut self.tail,
        };
        match list.iter().position(|c| c.name == config.name) {
            Some(i) if force_replace => list[i] = config,
            Some(_) => {}
            None if placement == Placement::Head => list.insert(0, config),
            None => list.push(config),
        }
        self
    }

    pub fn insert_head(&mut self, config: StageConfig, force_replace: bool) -> &mut Self {
        self.insert(Placement::Head, config, force_replace)
    }

    pub fn insert_middle(&mut self, config: StageConfig, force_replace: bool) -> &mut Self {
        self.insert(Placement::Middle, config, force_replace)
    }

    pub fn insert_tail(&mut self, config: StageConfig, force_replace: bool) -> &mut Self {
        self.insert(Placement::Tail, config, force_replace)
    }

    /// Concatenate the three lists
    pub fn build(self) -> Vec<StageConfig> {
        let mut configs = self.head;
        configs.extend(self.middle);
        configs.extend(self.tail);
        configs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StageOptions;
    use crate::stages::{HiraKataMode, HiraKataOptions};

    fn names(configs: &[StageConfig]) -> Vec<&str> {
        configs.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_lists_concatenate_in_order() {
        let mut builder = StageListBuilder::new();
        builder
            .insert_tail(StageConfig::new("hira-kata"), false)
            .insert_middle(StageConfig::new("spaces"), false)
            .insert_head(StageConfig::new("hira-kata-composition"), false)
            .insert_middle(StageConfig::new("radicals"), false)
            .insert_tail(StageConfig::new("jisx0201-and-alike"), false);
        assert_eq!(
            names(&builder.build()),
            vec![
                "hira-kata-composition",
                "spaces",
                "radicals",
                "hira-kata",
                "jisx0201-and-alike",
            ]
        );
    }

    #[test]
    fn test_head_entries_are_prepended() {
        let mut builder = StageListBuilder::new();
        builder
            .insert_head(StageConfig::new("ivs-svs-base"), false)
            .insert_head(StageConfig::new("hira-kata-composition"), false)
            .insert_head(StageConfig::new("ivs-svs-base"), false);
        assert_eq!(
            names(&builder.build()),
            vec!["hira-kata-composition", "ivs-svs-base"]
        );
    }

    #[test]
    fn test_forced_head_replacement_stays_in_place() {
        let kata_to_hira = StageConfig::from(StageOptions::HiraKata(HiraKataOptions {
            mode: HiraKataMode::KataToHira,
        }));
        let mut builder = StageListBuilder::new();
        builder
            .insert_head(StageConfig::new("hira-kata"), false)
            .insert_head(StageConfig::new("spaces"), false)
            .insert_head(kata_to_hira.clone(), true);
        let configs = builder.build();
        assert_eq!(names(&configs), vec!["spaces", "hira-kata"]);
        assert_eq!(configs[1], kata_to_hira);
    }

    #[test]
    fn test_duplicate_is_kept_unless_forced() {
        let kata_to_hira = StageConfig::from(StageOptions::HiraKata(HiraKataOptions {
            mode: HiraKataMode::KataToHira,
        }));

        let mut builder = StageListBuilder::new();
        builder
            .insert_tail(StageConfig::new("spaces"), false)
            .insert_tail(StageConfig::new("hira-kata"), false)
            .insert_tail(kata_to_hira.clone(), false);
        let configs = builder.build();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[1].options, None);

        let mut builder = StageListBuilder::new();
        builder
            .insert_tail(StageConfig::new("hira-kata"), false)
            .insert_tail(StageConfig::new("spaces"), false)
            .insert_tail(kata_to_hira.clone(), true);
        let configs = builder.build();
        // Replaced in place, not moved
        assert_eq!(names(&configs), vec!["hira-kata", "spaces"]);
        assert_eq!(configs[0], kata_to_hira);
    }

    #[test]
    fn test_lists_are_deduplicated_separately() {
        let mut builder = StageListBuilder::new();
        builder
            .insert_head(StageConfig::new("ivs-svs-base"), true)
            .insert_tail(StageConfig::new("ivs-svs-base"), true);
        assert_eq!(names(&builder.build()), vec!["ivs-svs-base", "ivs-svs-base"]);
    }

    #[test]
    fn test_empty_builder() {
        assert!(StageListBuilder::new().build().is_empty());
    }
}
