#[cfg(feature = "lambda")]
use bazi_chart::adapters::gateway::{handle_event, GatewayEvent, GatewayResponse};
#[cfg(feature = "lambda")]
use bazi_chart::utils::logger;
#[cfg(feature = "lambda")]
use bazi_chart::{ChartEngine, LambdaConfig};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    engine: ChartEngine,
    event: LambdaEvent<GatewayEvent>,
) -> Result<GatewayResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling chart request");
    Ok(handle_event(&engine, &event.payload))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let engine = ChartEngine::from_config(&config);
    tracing::info!(
        default_hour = engine.default_hour(),
        strict_ranges = engine.strict_ranges(),
        "Starting chart Lambda function"
    );

    run(service_fn(move |event| function_handler(engine, event))).await
}
