// This file makes the screen modules available to the rest of the application.

pub mod choose_cause;
pub mod create;
pub mod follow_people;
pub mod forgot_password;
pub mod home;
pub mod karma;
pub mod login;
pub mod onboarding;
pub mod otp;
pub mod phone;
pub mod profile;
pub mod signup;
pub mod user_profile;
pub mod video_feed;
pub mod welcome;
