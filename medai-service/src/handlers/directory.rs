use axum::Json;

use crate::models::{HealthTipsResponse, Specialist, SpecialistsResponse};

/// Static specialist directory. Defined at startup, never mutated.
pub async fn specialists() -> Json<SpecialistsResponse> {
    let specialists = vec![
        Specialist {
            id: 1,
            name: "Dr. Rajesh Kumar",
            specialty: "Cardiology",
            rating: 4.8,
        },
        Specialist {
            id: 2,
            name: "Dr. Priya Sharma",
            specialty: "Dermatology",
            rating: 4.7,
        },
        Specialist {
            id: 3,
            name: "Dr. Amit Patel",
            specialty: "Neurology",
            rating: 4.9,
        },
        Specialist {
            id: 4,
            name: "Dr. Anjali Singh",
            specialty: "Pediatrics",
            rating: 4.6,
        },
        Specialist {
            id: 5,
            name: "Dr. Vikram Gupta",
            specialty: "Orthopedics",
            rating: 4.8,
        },
    ];

    Json(SpecialistsResponse {
        success: true,
        specialists,
    })
}

/// Static list of general health tips.
pub async fn health_tips() -> Json<HealthTipsResponse> {
    let tips = vec![
        "Stay hydrated - drink at least 8 glasses of water daily",
        "Exercise regularly - aim for 30 minutes of physical activity",
        "Get adequate sleep - 7-9 hours per night",
        "Eat balanced meals with fruits and vegetables",
        "Manage stress through meditation or yoga",
    ];

    Json(HealthTipsResponse {
        success: true,
        tips,
    })
}
