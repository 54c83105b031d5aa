use serde::{Deserialize, Serialize};

/// A user record as returned by the remote collection. Fields the
/// presenter never uses (`id`, `phone`, `website`) are not modeled and
/// are ignored during decoding.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Option<Address>,
    pub company: Option<Company>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    #[serde(rename = "zipcode")]
    pub zip_code: String,
    #[serde(rename = "geo")]
    pub geolocation: Option<Geolocation>,
}

/// Coordinates arrive as decimal strings on the wire, so they stay
/// strings here rather than lose precision through a float round-trip.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Geolocation {
    #[serde(rename = "lat")]
    pub latitude: String,
    #[serde(rename = "lng")]
    pub longitude: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}
