use contracts::domain::a001_rug::RugRecord;
use gloo_net::http::Request;

/// Документ конвертера, отдается тем же сервером, что и фронтенд
const DATA_URL: &str = "/data.json";

/// Загрузить весь каталог
pub async fn fetch_catalog() -> Result<Vec<RugRecord>, String> {
    let response = Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<RugRecord> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
