//! Boilerplate template sources.
//!
//! Placeholders in square brackets are meant to be edited in the
//! document after insertion. The press release additionally exposes
//! template variables for the contact block, filled from
//! [`TemplateFields`](super::TemplateFields).

pub(super) const PRESS_RELEASE: &str = r##"
═══════════════════════════════════════════════════════
                    PRESS RELEASE
═══════════════════════════════════════════════════════

FOR IMMEDIATE RELEASE
[Date]

CONTACT:
{{ contact_name }}
{{ contact_phone }}
{{ contact_email }}

───────────────────────────────────────────────────────

                    [HEADLINE HERE]
          [Subheadline or key message here]

───────────────────────────────────────────────────────

[CITY, STATE] — [Opening paragraph: Who, what, when, where, why. Lead with the most newsworthy information.]

[Second paragraph: Expand on the key details. Include relevant context and background.]

[Quote paragraph:]
"[Insert powerful quote from spokesperson or community leader]," said [Name], [Title] of {{ organization }}.

[Additional details paragraph: Statistics, supporting information, or additional context.]

[Call to action paragraph: What should people do? Include event details, website, or contact information.]

###

ABOUT {{ organization | upper }}:
[Brief description of the organization, its mission, and its work.]

For more information, visit {{ website }} or contact {{ contact_name }} at {{ contact_email }}.

═══════════════════════════════════════════════════════
"##;

pub(super) const CALL_SCRIPT: &str = r##"
┌─────────────────────────────────────────────────────┐
│                 📞 CALL SCRIPT                       │
└─────────────────────────────────────────────────────┘

WHO TO CALL: [Official Name]
PHONE: [Phone Number]
BEST TIME: [Morning/Afternoon]

────────────────────────────────────────────────────────

WHEN THEY ANSWER:

"Hello, my name is [YOUR NAME] and I'm a constituent from [CITY/ZIP CODE].

I'm calling to urge [OFFICIAL'S TITLE] [OFFICIAL'S NAME] to [ACTION YOU WANT THEM TO TAKE].

[REASON 1: Why this matters to you personally]

[REASON 2: Why this matters to the community]

[REASON 3: Specific ask or policy position]

I would appreciate if you could let me know the [official's title]'s position on this issue.

Thank you for your time."

────────────────────────────────────────────────────────

IF YOU GET VOICEMAIL:

Leave your name, city, phone number, and a brief message.

────────────────────────────────────────────────────────

AFTER YOUR CALL:

□ Log your call at [website/tracker]
□ Share the script with friends and family
□ Follow up if you don't hear back in [X] days

┌─────────────────────────────────────────────────────┐
│  Remember: Be polite, be brief, be persistent!      │
└─────────────────────────────────────────────────────┘
"##;

pub(super) const EMAIL: &str = r##"
────────────────────────────────────────────────────────
                   ✉️ EMAIL TEMPLATE
────────────────────────────────────────────────────────

TO: [recipient@email.com]
SUBJECT: [Clear, specific subject line - include location if relevant]

────────────────────────────────────────────────────────

Dear [Title] [Last Name],

My name is [Your Name], and I am a [constituent/customer/community member] from [City, State]. I am writing to [express concern about / urge you to / request that you] [specific action or issue].

[PARAGRAPH 2: Personal connection]
This issue matters to me because [personal story or local impact]. [Include specific examples or data if available.]

[PARAGRAPH 3: The ask]
I respectfully request that you [specific action]. [Explain why this action is important and what positive outcomes it would create.]

[PARAGRAPH 4: Closing]
Thank you for your attention to this important matter. I look forward to hearing your response and learning about the steps you will take to address this issue.

Sincerely,

[Your Full Name]
[Your Address]
[Your City, State ZIP]
[Your Phone Number]
[Your Email]

────────────────────────────────────────────────────────
"##;

pub(super) const FLYER: &str = r##"
╔═══════════════════════════════════════════════════════╗
║                                                       ║
║              🔥 [EVENT/ACTION NAME] 🔥                ║
║                                                       ║
╠═══════════════════════════════════════════════════════╣
║                                                       ║
║    📅 DATE: [Day, Month Date, Year]                   ║
║                                                       ║
║    🕐 TIME: [Start Time] - [End Time]                 ║
║                                                       ║
║    📍 LOCATION:                                       ║
║       [Venue Name]                                    ║
║       [Street Address]                                ║
║       [City, State ZIP]                               ║
║                                                       ║
╠═══════════════════════════════════════════════════════╣
║                                                       ║
║              [MAIN MESSAGE OR CALL TO ACTION]         ║
║                                                       ║
║    ► [Key Point 1]                                    ║
║    ► [Key Point 2]                                    ║
║    ► [Key Point 3]                                    ║
║                                                       ║
╠═══════════════════════════════════════════════════════╣
║                                                       ║
║    WHAT TO BRING:                                     ║
║    □ [Item 1]                                         ║
║    □ [Item 2]                                         ║
║    □ [Item 3]                                         ║
║                                                       ║
╠═══════════════════════════════════════════════════════╣
║                                                       ║
║    📱 MORE INFO: [website or social media]            ║
║    ☎️ CONTACT: [phone or email]                       ║
║    #[Hashtag]                                         ║
║                                                       ║
╚═══════════════════════════════════════════════════════╝

[Organization logos and sponsors here]
"##;

pub(super) const RIGHTS_CARD: &str = r##"
╔═══════════════════════════════════════════════════════╗
║        🛡️ KNOW YOUR RIGHTS / CONOZCA SUS DERECHOS     ║
╚═══════════════════════════════════════════════════════╝

┌─────────────────────────────────────────────────────┐
│ IF IMMIGRATION (ICE) COMES TO YOUR HOME:            │
│ SI INMIGRACIÓN (ICE) VIENE A SU CASA:               │
├─────────────────────────────────────────────────────┤
│                                                     │
│ ✋ DO NOT OPEN THE DOOR                             │
│    NO ABRA LA PUERTA                                │
│                                                     │
│ 🚫 You do not have to let them in without a        │
│    warrant signed by a JUDGE                        │
│    No tiene que dejarlos entrar sin una orden      │
│    firmada por un JUEZ                              │
│                                                     │
│ 🤐 You have the right to remain SILENT             │
│    Tiene derecho a permanecer en SILENCIO          │
│                                                     │
│ 📋 Ask them to slip the warrant under the door     │
│    Pida que deslicen la orden bajo la puerta       │
│                                                     │
└─────────────────────────────────────────────────────┘

┌─────────────────────────────────────────────────────┐
│ IF YOU ARE STOPPED IN PUBLIC:                       │
│ SI LE PARAN EN PÚBLICO:                             │
├─────────────────────────────────────────────────────┤
│                                                     │
│ 🤐 You have the right to remain SILENT             │
│    Tiene derecho a permanecer en SILENCIO          │
│                                                     │
│ 📝 Say: "I wish to remain silent"                  │
│    Diga: "Deseo permanecer en silencio"            │
│                                                     │
│ 🚗 If driving, you must show license, registration │
│    Si conduce, debe mostrar licencia, registro     │
│                                                     │
└─────────────────────────────────────────────────────┘

┌─────────────────────────────────────────────────────┐
│ EMERGENCY CONTACTS / CONTACTOS DE EMERGENCIA:       │
├─────────────────────────────────────────────────────┤
│ Immigration Hotline: [NUMBER]                       │
│ Legal Aid: [NUMBER]                                 │
│ Family Contact: [NAME & NUMBER]                     │
└─────────────────────────────────────────────────────┘

┌─────────────────────────────────────────────────────┐
│ MEMORIZE YOUR EMERGENCY CONTACT NUMBER!             │
│ ¡MEMORICE SU NÚMERO DE CONTACTO DE EMERGENCIA!     │
└─────────────────────────────────────────────────────┘
"##;
