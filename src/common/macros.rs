/// Persists the parameters of a failed write to `error_logs` without
/// blocking the request that hit the failure. The insert is
/// best-effort.
#[macro_export]
macro_rules! log_err {
    // Usage: log_err!(&state.pool, &data);
    ($pool:expr, $params:expr) => {{
        let pool = $pool.clone();
        let location =
            format!("{}::{}:{}", module_path!(), file!(), line!());
        let parameters = match ::serde_json::to_value($params) {
            Ok(value) => value,
            Err(_) => ::serde_json::Value::Null,
        };

        ::tokio::spawn(async move {
            let _ = ::sqlx::query(
                r#"
                INSERT INTO error_logs (location, parameters)
                VALUES ($1, $2)
                "#,
            )
            .bind(location)
            .bind(parameters)
            .execute(&pool)
            .await;
        });
    }};
}
