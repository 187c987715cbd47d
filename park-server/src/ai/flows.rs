//! Flow definitions and the runner that executes them
//!
//! Every flow goes through the same pipeline: validate input, render the
//! prompt, call the provider under [`RetryPolicy`], then parse and validate
//! the model's JSON reply.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

use shared::models::{
    AskAssistantInput, AskAssistantOutput, CountVehiclesInput, CountVehiclesOutput, ParkingZone,
    VerifyIdentityInput, VerifyIdentityOutput,
};

use super::error::FlowError;
use super::prompt::PromptTemplate;
use super::provider::{InferenceProvider, InferenceRequest};
use super::retry::RetryPolicy;

#[derive(Debug, Clone, Copy)]
pub struct FlowDefinition {
    pub name: &'static str,
    pub prompt: PromptTemplate,
}

pub const VERIFY_IDENTITY: FlowDefinition = FlowDefinition {
    name: "verifyIdentity",
    prompt: PromptTemplate::new(
        "verifyIdentityPrompt",
        r#"You are a verification agent for Simhastha Park Smart. Your task is to verify the user's identity and vehicle details based on the provided information.

You must perform the following checks:
1.  Analyze the user's photo to ensure it's a real person's face.
2.  Check if the vehicle number has a valid format (e.g., MH-12-AB-1234).
3.  Check if the mobile number format is valid (it should be a 10-digit number).

Based on these checks, decide if the verification is successful.
- If the user's face is not clear or not a real person, fail the verification.
- If the vehicle number is invalid, fail the verification.
- If the mobile number is invalid, fail the verification.

If all checks pass, the verification is successful. Provide a clear reason for your decision in the 'reason' field.

User Information:
- Vehicle Number: {{{vehicleNumber}}}
- Mobile Number: {{{mobileNumber}}}
- User's Photo: {{media url=userPhotoDataUri}}

Respond with a JSON object of the form {"isVerified": boolean, "reason": string}.
"#,
    ),
};

pub const COUNT_VEHICLES: FlowDefinition = FlowDefinition {
    name: "countVehicles",
    prompt: PromptTemplate::new(
        "countVehiclesPrompt",
        r#"You are a vehicle counting system for a parking lot.
Analyze the provided image and count the number of vehicles present.

Image: {{media url=photoDataUri}}

Return only the total count of vehicles as a JSON object of the form {"vehicleCount": integer}."#,
    ),
};

pub const BOOKING_ASSISTANT: FlowDefinition = FlowDefinition {
    name: "askBookingAssistant",
    prompt: PromptTemplate::new(
        "askBookingAssistantPrompt",
        r#"You are a parking concierge for Simhastha Park Smart, an innovative parking management system.

Answer the following question to the best of your ability using the context provided.
If you cannot answer the question based on the context, respond politely that you do not have the information to answer the question.

Question: {{{query}}}

Context: Simhastha Park Smart provides real-time parking availability for different zones. Users can book available spaces. The system updates dynamically based on sensor data.

Current zones:
{{{zoneSummary}}}

Respond with a JSON object of the form {"answer": string}.
"#,
    ),
};

/// Executes flows against a provider
#[derive(Debug, Clone)]
pub struct FlowRunner {
    provider: Arc<dyn InferenceProvider>,
    policy: RetryPolicy,
}

impl FlowRunner {
    pub fn new(provider: Arc<dyn InferenceProvider>, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub async fn verify_identity(
        &self,
        input: &VerifyIdentityInput,
    ) -> Result<VerifyIdentityOutput, FlowError> {
        self.run(&VERIFY_IDENTITY, input).await
    }

    pub async fn count_vehicles(
        &self,
        input: &CountVehiclesInput,
    ) -> Result<CountVehiclesOutput, FlowError> {
        self.run(&COUNT_VEHICLES, input).await
    }

    /// Answer a free-text question, grounded in the current zone list
    pub async fn ask_booking_assistant(
        &self,
        input: &AskAssistantInput,
        zones: &[ParkingZone],
    ) -> Result<AskAssistantOutput, FlowError> {
        input.validate()?;
        let mut vars = to_vars(input)?;
        if let Value::Object(map) = &mut vars {
            map.insert("zoneSummary".into(), Value::String(zone_summary(zones)));
        }
        self.execute(&BOOKING_ASSISTANT, vars).await
    }

    /// Run any flow whose input renders directly into its prompt
    pub async fn run<I, O>(&self, flow: &FlowDefinition, input: &I) -> Result<O, FlowError>
    where
        I: Serialize + Validate,
        O: DeserializeOwned + Validate,
    {
        input.validate()?;
        let vars = to_vars(input)?;
        self.execute(flow, vars).await
    }

    async fn execute<O>(&self, flow: &FlowDefinition, vars: Value) -> Result<O, FlowError>
    where
        O: DeserializeOwned + Validate,
    {
        let request = InferenceRequest {
            operation: flow.name.to_string(),
            parts: flow.prompt.render(&vars)?,
        };

        let raw = self
            .policy
            .run(flow.name, |_| self.provider.generate(&request))
            .await?;

        let output = parse_output::<O>(&raw).map_err(|e| {
            tracing::warn!(flow = flow.name, error = %e, "Model returned malformed output");
            e
        })?;
        tracing::info!(flow = flow.name, provider = self.provider.name(), "Flow completed");
        Ok(output)
    }
}

fn to_vars<I: Serialize>(input: &I) -> Result<Value, FlowError> {
    serde_json::to_value(input).map_err(|e| FlowError::Prompt(e.to_string()))
}

/// Parse model text as `O`, tolerating a ```json fence around it
fn parse_output<O>(raw: &str) -> Result<O, FlowError>
where
    O: DeserializeOwned + Validate,
{
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed);

    let output: O =
        serde_json::from_str(body).map_err(|e| FlowError::MalformedOutput(e.to_string()))?;
    output
        .validate()
        .map_err(|e| FlowError::MalformedOutput(e.to_string()))?;
    Ok(output)
}

fn zone_summary(zones: &[ParkingZone]) -> String {
    if zones.is_empty() {
        return "No zones are configured.".to_string();
    }
    zones
        .iter()
        .map(|z| {
            format!(
                "- {} ({}), {}: {} of {} spaces available. Rules: {}",
                z.name, z.id, z.location, z.available_spaces, z.total_spaces, z.rules
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
