//! Practical visitor information and the booking form's fixed choices.

/// Label/value row such as an opening-hours line or an admission price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: &'static str,
}

/// A selectable visit time slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    /// 24h `HH:MM` value submitted with the booking.
    pub value: &'static str,
    pub label: &'static str,
}

pub const OPENING_HOURS: &[InfoRow] = &[
    InfoRow { label: "Monday - Friday", value: "10:00 AM - 6:00 PM" },
    InfoRow { label: "Saturday - Sunday", value: "9:00 AM - 8:00 PM" },
    InfoRow { label: "Holidays", value: "10:00 AM - 4:00 PM" },
];

pub const ADMISSION: &[InfoRow] = &[
    InfoRow { label: "Adult", value: "$25" },
    InfoRow { label: "Student/Senior", value: "$18" },
    InfoRow { label: "Child (5-12)", value: "$12" },
    InfoRow { label: "Family Pass", value: "$65" },
];

pub const SERVICES: &[&str] = &["Free Parking", "Wheelchair Access", "Photography Allowed", "Card Payments"];

pub const GETTING_HERE: &[(&str, &[&str])] = &[
    (
        "By Public Transport",
        &["Metro Line 2 to Cultural Station (5 min walk)", "Bus routes 15, 23, 45 stop directly outside"],
    ),
    ("By Car", &["Free parking available on-site", "Entrance via Cultural Avenue"]),
    (
        "Visitor Guidelines",
        &[
            "Photography allowed (no flash)",
            "Food and drinks in caf\u{e9} only",
            "Large bags must be checked",
            "Audio guides available",
        ],
    ),
];

pub const TIME_SLOTS: &[TimeSlot] = &[
    TimeSlot { value: "10:00", label: "10:00 AM" },
    TimeSlot { value: "11:00", label: "11:00 AM" },
    TimeSlot { value: "12:00", label: "12:00 PM" },
    TimeSlot { value: "13:00", label: "1:00 PM" },
    TimeSlot { value: "14:00", label: "2:00 PM" },
    TimeSlot { value: "15:00", label: "3:00 PM" },
    TimeSlot { value: "16:00", label: "4:00 PM" },
    TimeSlot { value: "17:00", label: "5:00 PM" },
];

pub const MAX_VISITORS: u8 = 10;

/// Option label for a party size: `1 person`, `4 people`.
#[must_use]
pub fn visitors_label(count: u8) -> String {
    if count == 1 { "1 person".to_owned() } else { format!("{count} people") }
}
