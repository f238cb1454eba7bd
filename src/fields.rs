//! Field selection for the user info route. The nested selection flattens
//! into dotted path segments joined into one `include` query value; the
//! response side stays a single fully-optional [`crate::models::UserInfo`]
//! record.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PetFields {
    pub skills: bool,
    pub genetics: bool,
    pub personality: bool,
    pub pet: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GiveawayFields {
    pub giveaway: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FishFields {
    pub fish: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FishingRodFields {
    pub fishing_rod: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchFields {
    pub home_team: bool,
    pub away_team: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BetFields {
    pub r#match: Option<MatchFields>,
}

/// Which optional sections of the user record to include. `Some(..)` on a
/// nested selector includes the section itself plus any selected
/// sub-sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserFields {
    pub pets: Option<PetFields>,
    pub active_pet: Option<PetFields>,
    pub giveaways: Option<GiveawayFields>,
    pub stocks: bool,
    pub fishs: Option<FishFields>,
    pub fishing_rods: Option<FishingRodFields>,
    pub cooldowns: bool,
    pub company: bool,
    pub bets: Option<BetFields>,
}

impl UserFields {
    /// Flattens the selection into dotted path segments, parents first.
    pub fn to_include(&self) -> Vec<String> {
        let mut paths = Vec::new();

        if let Some(pet) = &self.pets {
            push_pet_paths(&mut paths, "pets", pet);
        }
        if let Some(pet) = &self.active_pet {
            push_pet_paths(&mut paths, "activePet", pet);
        }
        if let Some(giveaways) = &self.giveaways {
            paths.push("giveaways".to_string());
            if giveaways.giveaway {
                paths.push("giveaways.giveaway".to_string());
            }
        }
        if self.stocks {
            paths.push("stocks".to_string());
        }
        if let Some(fishs) = &self.fishs {
            paths.push("fishs".to_string());
            if fishs.fish {
                paths.push("fishs.fish".to_string());
            }
        }
        if let Some(rods) = &self.fishing_rods {
            paths.push("fishingRods".to_string());
            if rods.fishing_rod {
                paths.push("fishingRods.fishingRod".to_string());
            }
        }
        if self.cooldowns {
            paths.push("cooldowns".to_string());
        }
        if self.company {
            paths.push("company".to_string());
        }
        if let Some(bets) = &self.bets {
            paths.push("bets".to_string());
            if let Some(fixture) = &bets.r#match {
                paths.push("bets.match".to_string());
                if fixture.home_team {
                    paths.push("bets.match.homeTeam".to_string());
                }
                if fixture.away_team {
                    paths.push("bets.match.awayTeam".to_string());
                }
            }
        }

        paths
    }

    /// The comma-joined `include` query value; `None` when nothing is
    /// selected so the query parameter is omitted entirely.
    pub fn to_query(&self) -> Option<String> {
        let paths = self.to_include();
        if paths.is_empty() {
            None
        } else {
            Some(paths.join(","))
        }
    }
}

fn push_pet_paths(paths: &mut Vec<String>, prefix: &str, fields: &PetFields) {
    paths.push(prefix.to_string());
    if fields.skills {
        paths.push(format!("{prefix}.skills"));
    }
    if fields.genetics {
        paths.push(format!("{prefix}.genetics"));
    }
    if fields.personality {
        paths.push(format!("{prefix}.personality"));
    }
    if fields.pet {
        paths.push(format!("{prefix}.pet"));
    }
}
