mod auth_event_bus;
