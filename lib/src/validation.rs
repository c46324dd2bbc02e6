use soroban_sdk::String;

use crate::{errors::MarketError, MAX_DESCRIPTION_LENGTH, MAX_STRING_LENGTH};

fn validate_length(value: &String, min: u32, max: u32) -> Result<(), MarketError> {
    if value.len() < min || value.len() > max {
        return Err(MarketError::InvalidInput);
    }
    Ok(())
}

pub fn validate_name(name: &String) -> Result<(), MarketError> {
    validate_length(name, 1, MAX_STRING_LENGTH)
}

pub fn validate_description(desc: &String) -> Result<(), MarketError> {
    validate_length(desc, 0, MAX_DESCRIPTION_LENGTH)
}

pub fn validate_image(img: &String) -> Result<(), MarketError> {
    validate_length(img, 0, MAX_STRING_LENGTH)
}

pub fn validate_listing(name: &String, desc: &String, img: &String) -> Result<(), MarketError> {
    validate_name(name)?;
    validate_description(desc)?;
    validate_image(img)
}
