use serde::{Deserialize, Serialize};

/// Engagement shape of a posted opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityType {
    Internship,
    FullTime,
    PartTime,
    Contract,
    Project,
    Volunteer,
    Freelance,
}

impl OpportunityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Internship => "internship",
            OpportunityType::FullTime => "full-time",
            OpportunityType::PartTime => "part-time",
            OpportunityType::Contract => "contract",
            OpportunityType::Project => "project",
            OpportunityType::Volunteer => "volunteer",
            OpportunityType::Freelance => "freelance",
        }
    }
}

impl std::str::FromStr for OpportunityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internship" => Ok(OpportunityType::Internship),
            "full-time" => Ok(OpportunityType::FullTime),
            "part-time" => Ok(OpportunityType::PartTime),
            "contract" => Ok(OpportunityType::Contract),
            "project" => Ok(OpportunityType::Project),
            "volunteer" => Ok(OpportunityType::Volunteer),
            "freelance" => Ok(OpportunityType::Freelance),
            other => Err(format!("unknown opportunity type '{other}'")),
        }
    }
}

/// A posted opportunity from the seed catalog.
///
/// `match_percentage` is never part of the seed data; the ranker annotates
/// it at query time and it is not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub description: String,
    pub required_skills: Vec<String>,
    /// ISO date string.
    pub deadline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub remote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_type_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&OpportunityType::FullTime).unwrap(),
            r#""full-time""#
        );
        assert_eq!(
            serde_json::to_string(&OpportunityType::Internship).unwrap(),
            r#""internship""#
        );
    }

    #[test]
    fn test_type_from_str_round_trips() {
        for kind in [
            OpportunityType::Internship,
            OpportunityType::FullTime,
            OpportunityType::PartTime,
            OpportunityType::Contract,
            OpportunityType::Project,
            OpportunityType::Volunteer,
            OpportunityType::Freelance,
        ] {
            assert_eq!(OpportunityType::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_type_from_str_rejects_unknown() {
        assert!(OpportunityType::from_str("apprenticeship").is_err());
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let opp = Opportunity {
            id: "1".to_string(),
            title: "Frontend Developer Intern".to_string(),
            company: "TechCorp".to_string(),
            location: "New York, NY".to_string(),
            kind: OpportunityType::Internship,
            description: String::new(),
            required_skills: vec![],
            deadline: "2023-05-30".to_string(),
            posted_date: None,
            remote: true,
            logo: None,
            match_percentage: None,
        };
        let json = serde_json::to_value(&opp).unwrap();
        assert_eq!(json["type"], "internship");
        assert!(json.get("matchPercentage").is_none());
    }
}
