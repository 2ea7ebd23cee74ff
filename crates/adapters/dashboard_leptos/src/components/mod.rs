mod loading;
mod relay_card;
mod stat_card;
mod watering_card;

pub use loading::Loading;
pub use relay_card::RelayCard;
pub use stat_card::StatCard;
pub use watering_card::WateringCard;
