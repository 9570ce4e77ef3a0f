use crate::shared::FullName;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: u32,
    pub club_id: u32,
    pub full_name: FullName,
    pub nation_id: u32,
    pub role: StaffRole,
    /// The one attribute that matters for the role, 1-20.
    pub rating: u8,
}

impl Display for Staff {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.full_name, self.role.title(), self.rating)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    Manager,
    AssistantManager,
    Coach,
    GoalkeepingCoach,
    Scout,
    Physio,
}

impl StaffRole {
    pub const ALL: [StaffRole; 6] = [
        StaffRole::Manager,
        StaffRole::AssistantManager,
        StaffRole::Coach,
        StaffRole::GoalkeepingCoach,
        StaffRole::Scout,
        StaffRole::Physio,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StaffRole::Manager => "Manager",
            StaffRole::AssistantManager => "Assistant Manager",
            StaffRole::Coach => "Coach",
            StaffRole::GoalkeepingCoach => "Goalkeeping Coach",
            StaffRole::Scout => "Scout",
            StaffRole::Physio => "Physio",
        }
    }

    /// Name of the attribute `rating` stands for.
    pub fn rated_attribute(&self) -> &'static str {
        match self {
            StaffRole::Manager => "man management",
            StaffRole::AssistantManager => "tactical knowledge",
            StaffRole::Coach => "coaching",
            StaffRole::GoalkeepingCoach => "goalkeeper coaching",
            StaffRole::Scout => "judging ability",
            StaffRole::Physio => "physiotherapy",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffCollection {
    pub staffs: Vec<Staff>,
}

impl StaffCollection {
    pub fn new(staffs: Vec<Staff>) -> Self {
        StaffCollection { staffs }
    }

    pub fn by_club(&self, club_id: u32) -> impl Iterator<Item = &Staff> {
        self.staffs.iter().filter(move |s| s.club_id == club_id)
    }

    pub fn find_role(&self, club_id: u32, role: StaffRole) -> Option<&Staff> {
        self.by_club(club_id).find(|s| s.role == role)
    }

    pub fn len(&self) -> usize {
        self.staffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staffs.is_empty()
    }
}
