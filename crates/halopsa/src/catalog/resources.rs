use super::{Field, FieldType, HttpMethod, Operation, Resource};

pub(super) static RESOURCES: &[Resource] = &[
    Resource {
        value: "actions",
        name: "Actions",
        description: "Manage actions in Halo PSA",
        operations: &[
            Operation {
                value: "getActions",
                name: "Get All Actions",
                description: "Get a list of all actions",
                action: "Get all actions",
                method: HttpMethod::Get,
                endpoint: "/Actions",
                fields: &[],
            },
            Operation {
                value: "getAction",
                name: "Get Action",
                description: "Get a specific action by ID",
                action: "Get an action",
                method: HttpMethod::Get,
                endpoint: "/Actions/{id}",
                fields: &[
                    Field::path("actionId", "id", "ID of the action"),
                ],
            },
            Operation {
                value: "createAction",
                name: "Create Action",
                description: "Create a new action",
                action: "Create an action",
                method: HttpMethod::Post,
                endpoint: "/Actions",
                fields: &[
                    Field::simple("description", FieldType::String, "Description of the action"),
                    Field::simple("duedate", FieldType::DateTime, "Due date of the action"),
                    Field::simple("assigned_user_id", FieldType::Number, "ID of the user assigned to the action"),
                    Field::simple("status_id", FieldType::Number, "ID of the action status"),
                    Field::simple("priority_id", FieldType::Number, "ID of the action priority"),
                ],
            },
            Operation {
                value: "deleteAction",
                name: "Delete Action",
                description: "Delete an action",
                action: "Delete an action",
                method: HttpMethod::Delete,
                endpoint: "/Actions/{id}",
                fields: &[
                    Field::path("actionId", "id", "ID of the action to delete"),
                ],
            },
            Operation {
                value: "createActionReaction",
                name: "Create Action Reaction",
                description: "Create a reaction to an action",
                action: "Create an action reaction",
                method: HttpMethod::Post,
                endpoint: "/Actions/reaction",
                fields: &[],
            },
            Operation {
                value: "reviewActions",
                name: "Review Actions",
                description: "Review actions",
                action: "Review actions",
                method: HttpMethod::Post,
                endpoint: "/Actions/Review",
                fields: &[],
            },
        ],
    },
    Resource {
        value: "addressbook",
        name: "Address Book",
        description: "Manage address book entries in Halo PSA",
        operations: &[
            Operation {
                value: "getAddressBookEntries",
                name: "Get All Address Book Entries",
                description: "Get a list of all address book entries",
                action: "Get all address book entries",
                method: HttpMethod::Get,
                endpoint: "/Addressbook",
                fields: &[],
            },
            Operation {
                value: "getAddressBookEntry",
                name: "Get Address Book Entry",
                description: "Get a specific address book entry by ID",
                action: "Get an address book entry",
                method: HttpMethod::Get,
                endpoint: "/Addressbook/{id}",
                fields: &[
                    Field::path("addressbookId", "id", "ID of the address book entry"),
                ],
            },
            Operation {
                value: "createAddressBookEntry",
                name: "Create Address Book Entry",
                description: "Create a new address book entry",
                action: "Create an address book entry",
                method: HttpMethod::Post,
                endpoint: "/Addressbook",
                fields: &[
                    Field::simple("first_name", FieldType::String, "First name of the contact"),
                    Field::simple("last_name", FieldType::String, "Last name of the contact"),
                    Field::simple("email", FieldType::String, "Email address of the contact"),
                    Field::simple("phone", FieldType::String, "Phone number of the contact"),
                    Field::simple("mobile", FieldType::String, "Mobile number of the contact"),
                    Field::simple("client_id", FieldType::Number, "ID of the client associated with this contact"),
                ],
            },
            Operation {
                value: "deleteAddressBookEntry",
                name: "Delete Address Book Entry",
                description: "Delete an address book entry",
                action: "Delete an address book entry",
                method: HttpMethod::Delete,
                endpoint: "/Addressbook/{id}",
                fields: &[
                    Field::path("addressbookId", "id", "ID of the address book entry to delete"),
                ],
            },
        ],
    },
    Resource {
        value: "appointment",
        name: "Appointment",
        description: "Manage appointments in Halo PSA",
        operations: &[
            Operation {
                value: "getAppointments",
                name: "Get All Appointments",
                description: "Get a list of all appointments",
                action: "Get all appointments",
                method: HttpMethod::Get,
                endpoint: "/Appointment",
                fields: &[],
            },
            Operation {
                value: "getAppointment",
                name: "Get Appointment",
                description: "Get a specific appointment by ID",
                action: "Get an appointment",
                method: HttpMethod::Get,
                endpoint: "/Appointment/{id}",
                fields: &[
                    Field::path("appointmentId", "id", "ID of the appointment"),
                ],
            },
            Operation {
                value: "createAppointment",
                name: "Create Appointment",
                description: "Create a new appointment",
                action: "Create an appointment",
                method: HttpMethod::Post,
                endpoint: "/Appointment",
                fields: &[
                    Field::simple("summary", FieldType::String, "Summary of the appointment"),
                    Field::simple("details", FieldType::String, "Details of the appointment"),
                    Field::simple("start_date", FieldType::DateTime, "Start date and time of the appointment"),
                    Field::simple("end_date", FieldType::DateTime, "End date and time of the appointment"),
                    Field::simple("user_id", FieldType::Number, "ID of the user for the appointment"),
                ],
            },
            Operation {
                value: "deleteAppointment",
                name: "Delete Appointment",
                description: "Delete an appointment",
                action: "Delete an appointment",
                method: HttpMethod::Delete,
                endpoint: "/Appointment/{id}",
                fields: &[
                    Field::path("appointmentId", "id", "ID of the appointment to delete"),
                ],
            },
        ],
    },
    Resource {
        value: "asset",
        name: "Asset",
        description: "Manage assets in Halo PSA",
        operations: &[
            Operation {
                value: "getAssets",
                name: "Get All Assets",
                description: "Get a list of all assets",
                action: "Get all assets",
                method: HttpMethod::Get,
                endpoint: "/Asset",
                fields: &[],
            },
            Operation {
                value: "getAsset",
                name: "Get Asset",
                description: "Get a specific asset by ID",
                action: "Get an asset",
                method: HttpMethod::Get,
                endpoint: "/Asset/{id}",
                fields: &[
                    Field::path("assetId", "id", "ID of the asset"),
                ],
            },
            Operation {
                value: "createAsset",
                name: "Create Asset",
                description: "Create a new asset",
                action: "Create an asset",
                method: HttpMethod::Post,
                endpoint: "/Asset",
                fields: &[
                    Field::simple("name", FieldType::String, "Name of the asset"),
                    Field::simple("description", FieldType::String, "Description of the asset"),
                    Field::simple("client_id", FieldType::Number, "ID of the client who owns the asset"),
                    Field::simple("site_id", FieldType::Number, "ID of the site where the asset is located"),
                    Field::simple("asset_type_id", FieldType::Number, "ID of the asset type"),
                    Field::simple("status_id", FieldType::Number, "ID of the asset status"),
                ],
            },
            Operation {
                value: "deleteAsset",
                name: "Delete Asset",
                description: "Delete an asset",
                action: "Delete an asset",
                method: HttpMethod::Delete,
                endpoint: "/Asset/{id}",
                fields: &[
                    Field::path("assetId", "id", "ID of the asset to delete"),
                ],
            },
        ],
    },
    Resource {
        value: "client",
        name: "Client",
        description: "Manage clients in Halo PSA",
        operations: &[
            Operation {
                value: "getClients",
                name: "Get All Clients",
                description: "Get a list of all clients",
                action: "Get all clients",
                method: HttpMethod::Get,
                endpoint: "/Client",
                fields: &[],
            },
            Operation {
                value: "getClient",
                name: "Get Client",
                description: "Get a specific client by ID",
                action: "Get a client",
                method: HttpMethod::Get,
                endpoint: "/Client/{id}",
                fields: &[
                    Field::path("clientId", "id", "ID of the client"),
                ],
            },
            Operation {
                value: "createClient",
                name: "Create Client",
                description: "Create a new client",
                action: "Create a client",
                method: HttpMethod::Post,
                endpoint: "/Client",
                fields: &[
                    Field::simple("name", FieldType::String, "Name of the client"),
                    Field::simple("email", FieldType::String, "Email of the client"),
                    Field::simple("phone", FieldType::String, "Phone number of the client"),
                    Field::simple("address", FieldType::String, "Address of the client"),
                ],
            },
            Operation {
                value: "deleteClient",
                name: "Delete Client",
                description: "Delete a client",
                action: "Delete a client",
                method: HttpMethod::Delete,
                endpoint: "/Client/{id}",
                fields: &[
                    Field::path("clientId", "id", "ID of the client to delete"),
                ],
            },
            Operation {
                value: "updateClientPaymentMethod",
                name: "Update Client Payment Method",
                description: "Update a client payment method",
                action: "Update a client payment method",
                method: HttpMethod::Post,
                endpoint: "/Client/PaymentMethodUpdate",
                fields: &[
                    Field::simple("client_id", FieldType::Number, "ID of the client to update payment method for"),
                    Field::simple("payment_method_id", FieldType::Number, "ID of the payment method to set"),
                    Field::simple("is_default", FieldType::Boolean, "Whether this payment method should be the default"),
                ],
            },
        ],
    },
    Resource {
        value: "tickets",
        name: "Tickets",
        description: "Manage tickets in Halo PSA",
        operations: &[
            Operation {
                value: "getTickets",
                name: "Get All Tickets",
                description: "Get a list of all tickets",
                action: "Get all tickets",
                method: HttpMethod::Get,
                endpoint: "/Tickets",
                fields: &[
                    Field::simple("client_id", FieldType::Number, "Filter tickets by client ID"),
                    Field::simple("status_id", FieldType::Number, "Filter tickets by status ID"),
                    Field::simple("agent_id", FieldType::Number, "Filter tickets by assigned agent ID"),
                    Field::simple("team_id", FieldType::Number, "Filter tickets by team ID"),
                    Field::simple("priority_id", FieldType::Number, "Filter tickets by priority ID"),
                    Field::simple("created_after", FieldType::DateTime, "Filter tickets created after this date"),
                    Field::simple("created_before", FieldType::DateTime, "Filter tickets created before this date"),
                    Field::simple("updated_after", FieldType::DateTime, "Filter tickets updated after this date"),
                    Field::simple("updated_before", FieldType::DateTime, "Filter tickets updated before this date"),
                ],
            },
            Operation {
                value: "getTicket",
                name: "Get Ticket",
                description: "Get a specific ticket by ID",
                action: "Get a ticket",
                method: HttpMethod::Get,
                endpoint: "/Tickets/{id}",
                fields: &[
                    Field::path("ticketId", "id", "ID of the ticket"),
                ],
            },
            Operation {
                value: "createTicket",
                name: "Create Ticket",
                description: "Create a new ticket",
                action: "Create a ticket",
                method: HttpMethod::Post,
                endpoint: "/Tickets",
                fields: &[
                    Field::simple("summary", FieldType::String, "Summary of the ticket"),
                    Field::simple("details", FieldType::String, "Details of the ticket"),
                    Field::simple("client_id", FieldType::Number, "ID of the client"),
                    Field::simple("site_id", FieldType::Number, "ID of the site"),
                    Field::simple("agent_id", FieldType::Number, "ID of the assigned agent"),
                    Field::simple("status_id", FieldType::Number, "ID of the status"),
                    Field::simple("priority_id", FieldType::Number, "ID of the priority"),
                ],
            },
            Operation {
                value: "deleteTicket",
                name: "Delete Ticket",
                description: "Delete a ticket",
                action: "Delete a ticket",
                method: HttpMethod::Delete,
                endpoint: "/Tickets/{id}",
                fields: &[
                    Field::path("ticketId", "id", "ID of the ticket to delete"),
                ],
            },
        ],
    },
    Resource {
        value: "supplier",
        name: "Supplier",
        description: "Manage suppliers in Halo PSA",
        operations: &[
            Operation {
                value: "getSuppliers",
                name: "Get All Suppliers",
                description: "Get a list of all suppliers",
                action: "Get all suppliers",
                method: HttpMethod::Get,
                endpoint: "/Supplier",
                fields: &[],
            },
            Operation {
                value: "getSupplier",
                name: "Get Supplier",
                description: "Get a specific supplier by ID",
                action: "Get a supplier",
                method: HttpMethod::Get,
                endpoint: "/Supplier/{id}",
                fields: &[
                    Field::path("supplierId", "id", "ID of the supplier"),
                ],
            },
            Operation {
                value: "createSupplier",
                name: "Create Supplier",
                description: "Create a new supplier",
                action: "Create a supplier",
                method: HttpMethod::Post,
                endpoint: "/Supplier",
                fields: &[
                    Field::simple("name", FieldType::String, "Name of the supplier"),
                    Field::simple("email", FieldType::String, "Email of the supplier"),
                    Field::simple("phone", FieldType::String, "Phone number of the supplier"),
                    Field::simple("address", FieldType::String, "Address of the supplier"),
                    Field::simple("contact_name", FieldType::String, "Name of the primary contact"),
                ],
            },
            Operation {
                value: "deleteSupplier",
                name: "Delete Supplier",
                description: "Delete a supplier",
                action: "Delete a supplier",
                method: HttpMethod::Delete,
                endpoint: "/Supplier/{id}",
                fields: &[
                    Field::path("supplierId", "id", "ID of the supplier to delete"),
                ],
            },
        ],
    },
    Resource {
        value: "attachment",
        name: "Attachment",
        description: "Manage attachments in Halo PSA",
        operations: &[
            Operation {
                value: "getAttachments",
                name: "Get All Attachments",
                description: "Get a list of all attachments",
                action: "Get all attachments",
                method: HttpMethod::Get,
                endpoint: "/Attachment",
                fields: &[],
            },
            Operation {
                value: "getAttachment",
                name: "Get Attachment",
                description: "Get a specific attachment by ID",
                action: "Get an attachment",
                method: HttpMethod::Get,
                endpoint: "/Attachment/{id}",
                fields: &[
                    Field::path("attachmentId", "id", "ID of the attachment"),
                ],
            },
            Operation {
                value: "createAttachment",
                name: "Create Attachment",
                description: "Create a new attachment",
                action: "Create an attachment",
                method: HttpMethod::Post,
                endpoint: "/Attachment",
                fields: &[
                    Field::simple("name", FieldType::String, "Name of the attachment"),
                    Field::simple("content", FieldType::String, "Base64-encoded content of the file"),
                    Field::simple("mime_type", FieldType::String, "MIME type of the attachment"),
                    Field::simple("record_id", FieldType::Number, "ID of the record to attach this file to"),
                    Field::simple("record_type", FieldType::Options(&["ticket", "client", "asset", "supplier"]), "Type of record to attach this file to"),
                ],
            },
            Operation {
                value: "deleteAttachment",
                name: "Delete Attachment",
                description: "Delete an attachment",
                action: "Delete an attachment",
                method: HttpMethod::Delete,
                endpoint: "/Attachment/{id}",
                fields: &[
                    Field::path("attachmentId", "id", "ID of the attachment to delete"),
                ],
            },
            Operation {
                value: "getAttachmentImage",
                name: "Get Attachment Image",
                description: "Get an attachment image",
                action: "Get an attachment image",
                method: HttpMethod::Get,
                endpoint: "/Attachment/image",
                fields: &[
                    Field::simple("id", FieldType::Number, "ID of the attachment to get the image for"),
                    Field::simple("width", FieldType::Number, "Width of the image (0 for original size)"),
                    Field::simple("height", FieldType::Number, "Height of the image (0 for original size)"),
                ],
            },
            Operation {
                value: "uploadAttachmentImage",
                name: "Upload Attachment Image",
                description: "Upload an attachment image",
                action: "Upload an attachment image",
                method: HttpMethod::Post,
                endpoint: "/Attachment/image",
                fields: &[
                    Field::simple("name", FieldType::String, "Name of the image attachment"),
                    Field::simple("record_id", FieldType::Number, "ID of the record to attach this image to"),
                    Field::simple("record_type", FieldType::Options(&["ticket", "client", "asset", "supplier"]), "Type of record to attach this image to"),
                ],
            },
            Operation {
                value: "getS3PresignedURL",
                name: "Get S3 Presigned URL",
                description: "Get an S3 presigned URL for attachment upload",
                action: "Get an S3 presigned URL",
                method: HttpMethod::Post,
                endpoint: "/Attachment/GetS3PresignedURL",
                fields: &[
                    Field::simple("filename", FieldType::String, "Name of the file to upload"),
                    Field::simple("mime_type", FieldType::String, "MIME type of the file"),
                    Field::simple("record_id", FieldType::Number, "ID of the record to attach this file to"),
                    Field::simple("record_type", FieldType::Options(&["ticket", "client", "asset", "supplier"]), "Type of record to attach this file to"),
                ],
            },
        ],
    },
    Resource {
        value: "crmNote",
        name: "CRM Note",
        description: "Manage CRM notes in Halo PSA",
        operations: &[
            Operation {
                value: "getCRMNotes",
                name: "Get All CRM Notes",
                description: "Get a list of all CRM notes",
                action: "Get all CRM notes",
                method: HttpMethod::Get,
                endpoint: "/CRMNote",
                fields: &[],
            },
            Operation {
                value: "getCRMNote",
                name: "Get CRM Note",
                description: "Get a specific CRM note by ID",
                action: "Get a CRM note",
                method: HttpMethod::Get,
                endpoint: "/CRMNote/{id}",
                fields: &[
                    Field::path("crmNoteId", "id", "ID of the CRM note"),
                ],
            },
            Operation {
                value: "createCRMNote",
                name: "Create CRM Note",
                description: "Create a new CRM note",
                action: "Create a CRM note",
                method: HttpMethod::Post,
                endpoint: "/CRMNote",
                fields: &[
                    Field::simple("note", FieldType::String, "Content of the CRM note"),
                    Field::simple("client_id", FieldType::Number, "ID of the client associated with the note"),
                    Field::simple("user_id", FieldType::Number, "ID of the user creating the note"),
                ],
            },
            Operation {
                value: "deleteCRMNote",
                name: "Delete CRM Note",
                description: "Delete a CRM note",
                action: "Delete a CRM note",
                method: HttpMethod::Delete,
                endpoint: "/CRMNote/{id}",
                fields: &[
                    Field::path("crmNoteId", "id", "ID of the CRM note to delete"),
                ],
            },
        ],
    },
    Resource {
        value: "report",
        name: "Report",
        description: "Manage reports in Halo PSA",
        operations: &[
            Operation {
                value: "getReports",
                name: "Get All Reports",
                description: "Get a list of all reports",
                action: "Get all reports",
                method: HttpMethod::Get,
                endpoint: "/Report",
                fields: &[],
            },
            Operation {
                value: "getReport",
                name: "Get Report",
                description: "Get a specific report by ID",
                action: "Get a report",
                method: HttpMethod::Get,
                endpoint: "/Report/{id}",
                fields: &[
                    Field::path("reportId", "id", "ID of the report"),
                ],
            },
            Operation {
                value: "createReport",
                name: "Create Report",
                description: "Create a new report",
                action: "Create a report",
                method: HttpMethod::Post,
                endpoint: "/Report",
                fields: &[
                    Field::simple("name", FieldType::String, "Name of the report"),
                    Field::simple("description", FieldType::String, "Description of the report"),
                    Field::simple("query", FieldType::String, "SQL query for the report"),
                ],
            },
            Operation {
                value: "createReportPDF",
                name: "Create Report PDF",
                description: "Create a PDF from a report",
                action: "Create a report PDF",
                method: HttpMethod::Post,
                endpoint: "/Report/createpdf",
                fields: &[],
            },
        ],
    },
    Resource {
        value: "audit",
        name: "Audit",
        description: "Manage audit logs in Halo PSA",
        operations: &[
            Operation {
                value: "getAuditLogs",
                name: "Get All Audit Logs",
                description: "Get a list of all audit logs",
                action: "Get all audit logs",
                method: HttpMethod::Get,
                endpoint: "/Audit",
                fields: &[
                    Field::simple("start_date", FieldType::DateTime, "Filter logs from this date"),
                    Field::simple("end_date", FieldType::DateTime, "Filter logs until this date"),
                    Field::simple("user_id", FieldType::Number, "Filter logs by user ID"),
                    Field::simple("record_type", FieldType::Options(&["ticket", "client", "asset", "supplier", "contract"]), "Filter logs by record type"),
                    Field::simple("record_id", FieldType::Number, "Filter logs by record ID"),
                ],
            },
        ],
    },
    Resource {
        value: "contract",
        name: "Contract",
        description: "Manage contracts in Halo PSA",
        operations: &[
            Operation {
                value: "getSupplierContracts",
                name: "Get All Supplier Contracts",
                description: "Get a list of all supplier contracts",
                action: "Get all supplier contracts",
                method: HttpMethod::Get,
                endpoint: "/SupplierContract",
                fields: &[],
            },
            Operation {
                value: "getSupplierContract",
                name: "Get Supplier Contract",
                description: "Get a specific supplier contract by ID",
                action: "Get a supplier contract",
                method: HttpMethod::Get,
                endpoint: "/SupplierContract/{id}",
                fields: &[
                    Field::path("contractId", "id", "ID of the supplier contract"),
                ],
            },
            Operation {
                value: "createSupplierContract",
                name: "Create Supplier Contract",
                description: "Create a new supplier contract",
                action: "Create a supplier contract",
                method: HttpMethod::Post,
                endpoint: "/SupplierContract",
                fields: &[
                    Field::simple("name", FieldType::String, "Name of the contract"),
                    Field::simple("supplier_id", FieldType::Number, "ID of the supplier for this contract"),
                    Field::simple("start_date", FieldType::DateTime, "Start date of the contract"),
                    Field::simple("end_date", FieldType::DateTime, "End date of the contract"),
                    Field::simple("value", FieldType::Number, "Value of the contract"),
                    Field::simple("status_id", FieldType::Number, "ID of the contract status"),
                    Field::simple("description", FieldType::String, "Description of the contract"),
                ],
            },
            Operation {
                value: "getClientContracts",
                name: "Get All Client Contracts",
                description: "Get a list of all client contracts",
                action: "Get all client contracts",
                method: HttpMethod::Get,
                endpoint: "/ClientContract",
                fields: &[],
            },
            Operation {
                value: "getClientContract",
                name: "Get Client Contract",
                description: "Get a specific client contract by ID",
                action: "Get a client contract",
                method: HttpMethod::Get,
                endpoint: "/ClientContract/{id}",
                fields: &[
                    Field::path("contractId", "id", "ID of the client contract"),
                ],
            },
            Operation {
                value: "createClientContract",
                name: "Create Client Contract",
                description: "Create a new client contract",
                action: "Create a client contract",
                method: HttpMethod::Post,
                endpoint: "/ClientContract",
                fields: &[
                    Field::simple("name", FieldType::String, "Name of the contract"),
                    Field::simple("client_id", FieldType::Number, "ID of the client for this contract"),
                    Field::simple("start_date", FieldType::DateTime, "Start date of the contract"),
                    Field::simple("end_date", FieldType::DateTime, "End date of the contract"),
                    Field::simple("value", FieldType::Number, "Value of the contract"),
                    Field::simple("status_id", FieldType::Number, "ID of the contract status"),
                    Field::simple("description", FieldType::String, "Description of the contract"),
                ],
            },
        ],
    },
    Resource {
        value: "callLog",
        name: "Call Log",
        description: "Manage call logs in Halo PSA",
        operations: &[
            Operation {
                value: "getCallLogs",
                name: "Get All Call Logs",
                description: "Get a list of all call logs",
                action: "Get all call logs",
                method: HttpMethod::Get,
                endpoint: "/CallLog",
                fields: &[
                    Field::simple("start_date", FieldType::DateTime, "Filter call logs from this date"),
                    Field::simple("end_date", FieldType::DateTime, "Filter call logs until this date"),
                    Field::simple("user_id", FieldType::Number, "Filter call logs by user ID"),
                    Field::simple("client_id", FieldType::Number, "Filter call logs by client ID"),
                    Field::simple("ticket_id", FieldType::Number, "Filter call logs by ticket ID"),
                ],
            },
        ],
    },
    Resource {
        value: "certificate",
        name: "Certificate",
        description: "Manage certificates in Halo PSA",
        operations: &[
            Operation {
                value: "getCertificates",
                name: "Get All Certificates",
                description: "Get a list of all certificates",
                action: "Get all certificates",
                method: HttpMethod::Get,
                endpoint: "/Certificate",
                fields: &[
                    Field::simple("client_id", FieldType::Number, "Filter certificates by client ID"),
                    Field::simple("asset_id", FieldType::Number, "Filter certificates by asset ID"),
                    Field::simple("status", FieldType::Options(&["active", "expired", "revoked"]), "Filter certificates by status"),
                    Field::simple("expiry_before", FieldType::DateTime, "Filter certificates expiring before this date"),
                    Field::simple("expiry_after", FieldType::DateTime, "Filter certificates expiring after this date"),
                ],
            },
        ],
    },
    Resource {
        value: "costCentres",
        name: "Cost Centres",
        description: "Manage cost centres in Halo PSA",
        operations: &[
            Operation {
                value: "getCostCentres",
                name: "Get All Cost Centres",
                description: "Get a list of all cost centres",
                action: "Get all cost centres",
                method: HttpMethod::Get,
                endpoint: "/CostCentres",
                fields: &[
                    Field::simple("active_only", FieldType::Boolean, "Whether to return only active cost centres"),
                    Field::simple("name", FieldType::String, "Filter cost centres by name"),
                    Field::simple("code", FieldType::String, "Filter cost centres by code"),
                ],
            },
        ],
    },
];
