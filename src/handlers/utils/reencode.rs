// Bridges teloxide's types into this crate's own Bot API model through their shared JSON form.

use serde::{Serialize, de::DeserializeOwned};

pub fn reencode<T, U>(value: &T) -> Result<U, serde_json::Error>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    serde_json::to_value(value).and_then(serde_json::from_value)
}
