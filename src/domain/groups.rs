//! Named user groups of datasets.
//!
//! Each group bundles the ACS tables most relevant to one audience of the
//! dashboard. The first group is the catch-all and doubles as the default
//! selection.

/// A named bundle of dataset codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserGroup {
    pub name: &'static str,
    pub description: &'static str,
    pub datasets: &'static [&'static str],
}

pub const USER_GROUPS: &[UserGroup] = &[
    UserGroup {
        name: "All Users",
        description: "Includes all user groups and datasets.",
        datasets: &[
            "B08303", "B11016", "B14001", "B15003", "B17020", "B18101", "B19001",
            "B23025", "B25001", "B25002", "C24010", "B01001", "B02001", "B08134",
        ],
    },
    UserGroup {
        name: "1. Residential Users",
        description: "Residents (long-term), Renters, Homeowners, Families, Young professionals, Seniors/Retirees",
        datasets: &["B01001", "B02001", "B11016", "B25001", "B25002"],
    },
    UserGroup {
        name: "2. Community Service Users",
        description: "Community group participants, Healthcare seekers, Low-income individuals and families",
        datasets: &["B17020", "B18101", "B14001", "B23025"],
    },
    UserGroup {
        name: "3. Recreational Users",
        description: "Park and green space visitors, Fitness enthusiasts, Cultural event attendees",
        datasets: &["B01001", "B02001", "B19001"],
    },
    UserGroup {
        name: "4. Transit Users",
        description: "Public transportation users, Pedestrians, Cyclists",
        datasets: &["B08303", "B08134", "C24010"],
    },
    UserGroup {
        name: "5. Economic Users",
        description: "Shoppers and retail customers, Visitors and tourists",
        datasets: &["B17020", "B19001", "B23025"],
    },
    UserGroup {
        name: "6. Workforce",
        description: "Commuters, Workers (local and from surrounding areas), Job seekers, Small business owners and entrepreneurs",
        datasets: &["B23025", "C24010", "B15003"],
    },
    UserGroup {
        name: "7. Special Populations",
        description: "People with disabilities, Immigrants and non-native English speakers",
        datasets: &["B01001", "B02001", "B18101"],
    },
];

/// Dataset shown when the caller does not pick one.
pub fn default_dataset() -> &'static str {
    USER_GROUPS[0].datasets[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_group_dataset_is_in_the_catch_all() {
        let all = USER_GROUPS[0].datasets;
        for group in &USER_GROUPS[1..] {
            for code in group.datasets {
                assert!(all.contains(code), "{code} missing from All Users");
            }
        }
    }

    #[test]
    fn default_dataset_is_first_of_first_group() {
        assert_eq!(default_dataset(), USER_GROUPS[0].datasets[0]);
    }
}
