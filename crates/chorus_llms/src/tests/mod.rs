mod anthropic_api;
