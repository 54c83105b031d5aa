use std::io::Write;

use crate::error::Result;
use crate::types::User;

/// Write one human-readable block per user, in collection order. Each
/// block ends with a blank line; absent optional sub-records are skipped.
pub fn write_users<W: Write>(out: &mut W, users: &[User]) -> Result<()> {
    for user in users {
        writeln!(out, "{} ({})", user.name, user.username)?;
        writeln!(out, "{}", user.email)?;

        if let Some(address) = &user.address {
            writeln!(
                out,
                "{}, {}, {} {}",
                address.street, address.suite, address.city, address.zip_code
            )?;

            if let Some(geo) = &address.geolocation {
                writeln!(out, "{}, {}", geo.latitude, geo.longitude)?;
            }
        }

        if let Some(company) = &user.company {
            writeln!(out, "{} (\"{}\")", company.name, company.catch_phrase)?;
            writeln!(out, "{}", company.bs)?;
        }

        writeln!(out)?;
    }

    Ok(())
}

/// Encode the collection as a generic structural value and write it
/// pretty-printed. Absent optionals come out as explicit `null`.
pub fn write_json<W: Write>(out: &mut W, users: &[User]) -> Result<()> {
    let value = serde_json::to_value(users)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}
