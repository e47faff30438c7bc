//! University seed data, sampled from a Kaggle engineering-college dataset.

use crate::models::university::{FeeRange, Stream, University};

fn courses(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn seed() -> Vec<University> {
    vec![
        University {
            id: "1".to_string(),
            name: "Indian Institute of Technology Bombay".to_string(),
            streams: vec![Stream::Science],
            courses: courses(&[
                "Computer Science",
                "Electrical Engineering",
                "Mechanical Engineering",
                "Civil Engineering",
            ]),
            min_eligibility: 85.0,
            fees: FeeRange { min: 100_000, max: 200_000 },
            admission_deadline: "2025-05-30".to_string(),
            campus_rating: 4.9,
            location: "Mumbai, Maharashtra".to_string(),
            accepting_applications: true,
            available_seats: 500,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: Some(2),
            established_year: Some(1958),
            campus_size_acres: Some(550),
            specialization: Some(courses(&[
                "Computer Science",
                "Electronics",
                "Aerospace Engineering",
            ])),
        },
        University {
            id: "2".to_string(),
            name: "National Institute of Technology Tiruchirappalli".to_string(),
            streams: vec![Stream::Science],
            courses: courses(&[
                "Computer Science",
                "Electronics Engineering",
                "Mechanical Engineering",
            ]),
            min_eligibility: 80.0,
            fees: FeeRange { min: 80_000, max: 130_000 },
            admission_deadline: "2025-06-15".to_string(),
            campus_rating: 4.7,
            location: "Tiruchirappalli, Tamil Nadu".to_string(),
            accepting_applications: true,
            available_seats: 600,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: Some(9),
            established_year: Some(1964),
            campus_size_acres: Some(800),
            specialization: None,
        },
        University {
            id: "3".to_string(),
            name: "Birla Institute of Technology & Science Pilani".to_string(),
            streams: vec![Stream::Science],
            courses: courses(&[
                "Computer Science",
                "Electronics Engineering",
                "Chemical Engineering",
            ]),
            min_eligibility: 85.0,
            fees: FeeRange { min: 150_000, max: 250_000 },
            admission_deadline: "2025-05-15".to_string(),
            campus_rating: 4.6,
            location: "Pilani, Rajasthan".to_string(),
            accepting_applications: true,
            available_seats: 700,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: Some(28),
            established_year: Some(1964),
            campus_size_acres: None,
            specialization: Some(courses(&["Computer Science", "Electronics"])),
        },
        University {
            id: "4".to_string(),
            name: "Indian Institute of Technology Delhi".to_string(),
            streams: vec![Stream::Science],
            courses: courses(&[
                "Computer Science",
                "Electrical Engineering",
                "Mechanical Engineering",
                "Chemical Engineering",
            ]),
            min_eligibility: 90.0,
            fees: FeeRange { min: 100_000, max: 200_000 },
            admission_deadline: "2025-05-30".to_string(),
            campus_rating: 4.8,
            location: "New Delhi, Delhi".to_string(),
            accepting_applications: true,
            available_seats: 450,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: Some(3),
            established_year: Some(1961),
            campus_size_acres: Some(325),
            specialization: None,
        },
        University {
            id: "5".to_string(),
            name: "Shri Ram College of Commerce".to_string(),
            streams: vec![Stream::Commerce],
            courses: courses(&["Accounting", "Economics", "Business Studies", "Finance"]),
            min_eligibility: 96.0,
            fees: FeeRange { min: 70_000, max: 90_000 },
            admission_deadline: "2025-06-10".to_string(),
            campus_rating: 4.5,
            location: "Delhi, India".to_string(),
            accepting_applications: true,
            available_seats: 300,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: None,
            established_year: None,
            campus_size_acres: None,
            specialization: None,
        },
        University {
            id: "6".to_string(),
            name: "St. Stephen's College".to_string(),
            streams: vec![Stream::Arts, Stream::Science],
            courses: courses(&["English Literature", "Physics", "Chemistry", "History"]),
            min_eligibility: 95.0,
            fees: FeeRange { min: 60_000, max: 85_000 },
            admission_deadline: "2025-06-15".to_string(),
            campus_rating: 4.6,
            location: "Delhi, India".to_string(),
            accepting_applications: false,
            available_seats: 250,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: None,
            established_year: Some(1881),
            campus_size_acres: None,
            specialization: None,
        },
        University {
            id: "7".to_string(),
            name: "Vellore Institute of Technology".to_string(),
            streams: vec![Stream::Science],
            courses: courses(&[
                "Computer Science",
                "Biotechnology",
                "Mechanical Engineering",
                "Electronics",
            ]),
            min_eligibility: 75.0,
            fees: FeeRange { min: 150_000, max: 350_000 },
            admission_deadline: "2025-04-30".to_string(),
            campus_rating: 4.4,
            location: "Vellore, Tamil Nadu".to_string(),
            accepting_applications: true,
            available_seats: 1200,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: Some(13),
            established_year: Some(1984),
            campus_size_acres: Some(625),
            specialization: None,
        },
        University {
            id: "8".to_string(),
            name: "Loyola College".to_string(),
            streams: vec![Stream::Arts, Stream::Science, Stream::Commerce],
            courses: courses(&["Economics", "Computer Science", "Psychology", "Commerce"]),
            min_eligibility: 80.0,
            fees: FeeRange { min: 50_000, max: 95_000 },
            admission_deadline: "2025-06-10".to_string(),
            campus_rating: 4.3,
            location: "Chennai, Tamil Nadu".to_string(),
            accepting_applications: true,
            available_seats: 900,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: None,
            established_year: Some(1925),
            campus_size_acres: None,
            specialization: None,
        },
        University {
            id: "9".to_string(),
            name: "PSG College of Technology".to_string(),
            streams: vec![Stream::Science],
            courses: courses(&[
                "Electronics and Communication",
                "Computer Science",
                "Mechanical Engineering",
            ]),
            min_eligibility: 78.0,
            fees: FeeRange { min: 80_000, max: 150_000 },
            admission_deadline: "2025-05-25".to_string(),
            campus_rating: 4.2,
            location: "Coimbatore, Tamil Nadu".to_string(),
            accepting_applications: true,
            available_seats: 800,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: Some(37),
            established_year: Some(1951),
            campus_size_acres: None,
            specialization: None,
        },
        University {
            id: "10".to_string(),
            name: "Indian Statistical Institute".to_string(),
            streams: vec![Stream::Science],
            courses: courses(&["Statistics", "Mathematics", "Data Science", "Computer Science"]),
            min_eligibility: 88.0,
            fees: FeeRange { min: 60_000, max: 110_000 },
            admission_deadline: "2025-05-10".to_string(),
            campus_rating: 4.7,
            location: "Kolkata, West Bengal".to_string(),
            accepting_applications: true,
            available_seats: 200,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: None,
            established_year: Some(1931),
            campus_size_acres: None,
            specialization: Some(courses(&["Statistics", "Data Science", "Machine Learning"])),
        },
        University {
            id: "11".to_string(),
            name: "Lady Shri Ram College for Women".to_string(),
            streams: vec![Stream::Arts, Stream::Commerce],
            courses: courses(&["Psychology", "Economics", "English Literature", "Journalism"]),
            min_eligibility: 94.0,
            fees: FeeRange { min: 55_000, max: 85_000 },
            admission_deadline: "2025-06-15".to_string(),
            campus_rating: 4.6,
            location: "Delhi, India".to_string(),
            accepting_applications: true,
            available_seats: 400,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: None,
            established_year: Some(1956),
            campus_size_acres: None,
            specialization: None,
        },
        University {
            id: "12".to_string(),
            name: "IIT Madras".to_string(),
            streams: vec![Stream::Science],
            courses: courses(&[
                "Aerospace Engineering",
                "Computer Science",
                "Data Science",
                "Electrical Engineering",
            ]),
            min_eligibility: 90.0,
            fees: FeeRange { min: 100_000, max: 200_000 },
            admission_deadline: "2025-05-15".to_string(),
            campus_rating: 4.9,
            location: "Chennai, Tamil Nadu".to_string(),
            accepting_applications: true,
            available_seats: 500,
            logo_url: "/placeholder.svg".to_string(),
            nirf_rank: Some(1),
            established_year: Some(1959),
            campus_size_acres: Some(630),
            specialization: Some(courses(&[
                "Aerospace Engineering",
                "Artificial Intelligence",
                "Robotics",
            ])),
        },
    ]
}
