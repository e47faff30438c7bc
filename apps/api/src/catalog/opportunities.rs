//! Opportunity and member seed data.

use crate::models::opportunity::{Opportunity, OpportunityType};
use crate::models::user::{FileUpload, User};

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn seed() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: "1".to_string(),
            title: "Frontend Developer Intern".to_string(),
            company: "TechCorp".to_string(),
            location: "New York, NY".to_string(),
            kind: OpportunityType::Internship,
            description: "Join our team to develop cutting-edge web applications using React. \
                          Work directly with senior developers on real client projects."
                .to_string(),
            required_skills: skills(&["React", "JavaScript", "HTML", "CSS"]),
            deadline: "2023-05-30".to_string(),
            posted_date: Some("2023-04-12".to_string()),
            remote: true,
            logo: Some("https://logo.clearbit.com/google.com".to_string()),
            match_percentage: None,
        },
        Opportunity {
            id: "2".to_string(),
            title: "UI/UX Design Project".to_string(),
            company: "DesignHub".to_string(),
            location: "Remote".to_string(),
            kind: OpportunityType::Project,
            description: "Help redesign our mobile application interface. Looking for fresh \
                          perspectives and modern design sensibilities."
                .to_string(),
            required_skills: skills(&["UI/UX Design", "Figma", "Mobile Design"]),
            deadline: "2023-06-15".to_string(),
            posted_date: Some("2023-04-02".to_string()),
            remote: true,
            logo: Some("https://logo.clearbit.com/figma.com".to_string()),
            match_percentage: None,
        },
        Opportunity {
            id: "3".to_string(),
            title: "Data Science Volunteer".to_string(),
            company: "EcoTech Nonprofit".to_string(),
            location: "Boston, MA".to_string(),
            kind: OpportunityType::Volunteer,
            description: "Analyze environmental data to help our conservation efforts. Great \
                          opportunity to apply data science skills for a good cause."
                .to_string(),
            required_skills: skills(&["Python", "Data Analysis", "Statistics"]),
            deadline: "2023-07-01".to_string(),
            posted_date: Some("2023-03-28".to_string()),
            remote: false,
            logo: Some("https://logo.clearbit.com/mongodb.com".to_string()),
            match_percentage: None,
        },
        Opportunity {
            id: "4".to_string(),
            title: "Mobile App Developer".to_string(),
            company: "StartupX".to_string(),
            location: "San Francisco, CA".to_string(),
            kind: OpportunityType::Freelance,
            description: "Develop a new mobile app from scratch. This is a short-term freelance \
                          opportunity with possibility for future work."
                .to_string(),
            required_skills: skills(&["React Native", "JavaScript", "Mobile Development"]),
            deadline: "2023-05-15".to_string(),
            posted_date: Some("2023-04-18".to_string()),
            remote: true,
            logo: Some("https://logo.clearbit.com/microsoft.com".to_string()),
            match_percentage: None,
        },
        Opportunity {
            id: "5".to_string(),
            title: "Backend Developer Intern".to_string(),
            company: "CloudSystems".to_string(),
            location: "Austin, TX".to_string(),
            kind: OpportunityType::Internship,
            description: "Build and optimize backend services for our cloud platform. Learn \
                          about scalable architecture and database design."
                .to_string(),
            required_skills: skills(&["Node.js", "Express", "MongoDB", "API Design"]),
            deadline: "2023-06-30".to_string(),
            posted_date: Some("2023-03-15".to_string()),
            remote: false,
            logo: Some("https://logo.clearbit.com/aws.amazon.com".to_string()),
            match_percentage: None,
        },
    ]
}

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            skills: skills(&["React", "JavaScript", "UI/UX Design", "Figma"]),
            profile_picture: Some("https://i.pravatar.cc/150?img=11".to_string()),
            uploaded_files: vec![FileUpload {
                id: "file1".to_string(),
                filename: "resume_alex.pdf".to_string(),
                upload_date: "2023-04-05".to_string(),
                file_type: "application/pdf".to_string(),
                size: "1.2 MB".to_string(),
            }],
        },
        User {
            id: "2".to_string(),
            name: "Sam Taylor".to_string(),
            email: "sam@example.com".to_string(),
            skills: skills(&["Python", "Data Analysis", "Machine Learning", "SQL"]),
            profile_picture: Some("https://i.pravatar.cc/150?img=5".to_string()),
            uploaded_files: vec![],
        },
    ]
}
