pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod clock;
        pub mod record_store;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod duration;
            pub mod events;
            pub mod evolve;
            pub mod gate;
            pub mod justification;
            pub mod punch;
            pub mod record;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod submit_punch {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod submit_justification {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod decide_justification {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_daily_record {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_pending_justifications {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod compute_monthly {
                pub mod aggregate;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_support;
            }
            pub mod outbound {
                pub mod record_commit;
            }
        }
    }
}

pub mod shell;
