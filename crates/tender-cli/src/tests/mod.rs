mod documents;
mod logger;
