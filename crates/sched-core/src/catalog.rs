//! Built-in talk list used when no input is given.

use crate::talk::Talk;

const DEFAULT_TALKS: &[(&str, u32)] = &[
    ("Organising Parents for Academy Improvements", 60),
    ("Teaching Innovations in the Pipeline", 45),
    ("Teacher Computer Hacks", 30),
    ("Making Your Academy Beautiful", 45),
    ("Academy Tech Field Repair", 45),
    ("Sync Hard", 5),
    ("Unusual Recruiting", 5),
    ("Parent Teacher Conferences", 60),
    ("Managing Your Dire Allowance", 45),
    ("Customer Care", 30),
    ("AIMs – 'Managing Up'", 30),
    ("Dealing with Problem Teachers", 45),
    ("Hiring the Right Cook", 60),
    ("Government Policy Changes and New Globe", 60),
    ("Adjusting to Relocation", 45),
    ("Public Works in Your Community", 30),
    ("Talking To Parents About Billing", 30),
    ("So They Say You're a Devil Worshipper", 60),
    ("Two-Streams or Not Two-Streams", 30),
    ("Piped Water", 30),
];

/// Returns the default catalog of talks, in catalog order.
pub fn default_talks() -> Vec<Talk> {
    DEFAULT_TALKS
        .iter()
        .filter_map(|&(title, minutes)| Talk::new(title, minutes).ok())
        .collect()
}
