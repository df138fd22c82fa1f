//! DLC pro parameter tree, firmware 2.0.3.
//!
//! Generated from the DLC pro 2.0.3 system model. Do not edit by hand.

#![allow(missing_docs)]

use decof_client::{
    decof_node, AccessLevel, Client, Connection, DecofBinary, DecofBoolean, DecofError,
    DecofInteger, DecofReal, DecofString, MutableDecofBoolean, MutableDecofInteger,
    MutableDecofReal, MutableDecofString, Node, NodeRef, Result, StreamInput, Value, ValueType,
};

decof_node! {
    pub struct Ipconfig {
        ip_addr: DecofString = "ip-addr",
        cmd_port: DecofInteger = "cmd-port",
        dhcp: DecofBoolean = "dhcp",
        mac_addr: DecofString = "mac-addr",
        net_mask: DecofString = "net-mask",
        mon_port: DecofInteger = "mon-port",
    }
}

impl Ipconfig {
    pub async fn set_dhcp(&self) -> Result<()> {
        self.node.exec("set-dhcp", &[]).await
    }

    pub async fn apply(&self) -> Result<()> {
        self.node.exec("apply", &[]).await
    }

    pub async fn set_ip(&self, ip_addr: &str, net_mask: &str) -> Result<()> {
        self.node.exec("set-ip", &[Value::from(ip_addr), Value::from(net_mask)]).await
    }
}

decof_node! {
    pub struct FwUpdate {
    }
}

impl FwUpdate {
    pub async fn upload(&self, stream_input: &[u8], filename: &str) -> Result<()> {
        self.node
            .exec_with_input("upload", &[Value::from(filename)], StreamInput::Binary(stream_input))
            .await
    }

    pub async fn show_history(&self) -> Result<String> {
        self.node.exec_output("show-history", &[]).await
    }

    pub async fn show_log(&self) -> Result<String> {
        self.node.exec_output("show-log", &[]).await
    }
}

decof_node! {
    pub struct SystemMessages {
        count: DecofInteger = "count",
        latest_message: DecofString = "latest-message",
        count_new: DecofInteger = "count-new",
    }
}

impl SystemMessages {
    pub async fn mark_as_read(&self, id: i64) -> Result<()> {
        self.node.exec("mark-as-read", &[Value::from(id)]).await
    }

    pub async fn show_new(&self) -> Result<String> {
        self.node.exec_output("show-new", &[]).await
    }

    pub async fn show_all(&self) -> Result<String> {
        self.node.exec_output("show-all", &[]).await
    }

    pub async fn show_log(&self) -> Result<String> {
        self.node.exec_output("show-log", &[]).await
    }

    pub async fn show_persistent(&self) -> Result<String> {
        self.node.exec_output("show-persistent", &[]).await
    }
}

decof_node! {
    pub struct ServiceReport {
        ready: DecofBoolean = "ready",
    }
}

impl ServiceReport {
    pub async fn request(&self) -> Result<()> {
        self.node.exec("request", &[]).await
    }

    pub async fn add_info(&self, text: &str) -> Result<()> {
        self.node.exec("add-info", &[Value::from(text)]).await
    }

    pub async fn print(&self) -> Result<Vec<u8>> {
        self.node.exec_output("print", &[]).await
    }

    pub async fn service_report(&self) -> Result<Vec<u8>> {
        self.node.exec_output("service-report", &[]).await
    }
}

decof_node! {
    pub struct Licenses {
        installed_keys: DecofInteger = "installed-keys",
        options: LicenseOptions = "options",
    }
}

impl Licenses {
    pub async fn get_key(&self, key_number: i64) -> Result<String> {
        self.node.exec_returning("get-key", &[Value::from(key_number)]).await
    }

    pub async fn install(&self, licensekey: &str) -> Result<bool> {
        self.node.exec_returning("install", &[Value::from(licensekey)]).await
    }
}

decof_node! {
    pub struct LicenseOptions {
        dual_laser_operation: LicenseOption = "dual-laser-operation",
        quad_laser_operation: LicenseOption = "quad-laser-operation",
        automatic_nlo_operation: LicenseOption = "automatic-nlo-operation",
        lock: LicenseOption = "lock",
    }
}

decof_node! {
    pub struct LicenseOption {
        licensee: DecofString = "licensee",
        enabled: DecofBoolean = "enabled",
        valid_until: DecofString = "valid-until",
    }
}

decof_node! {
    pub struct BuildInformation {
        build_tag: DecofString = "build-tag",
        build_number: DecofInteger = "build-number",
        build_node_name: DecofString = "build-node-name",
        build_id: DecofString = "build-id",
        build_url: DecofString = "build-url",
        job_name: DecofString = "job-name",
        c_compiler_version: DecofString = "c-compiler-version",
        c_compiler_id: DecofString = "c-compiler-id",
        cxx_compiler_version: DecofString = "cxx-compiler-version",
        cxx_compiler_id: DecofString = "cxx-compiler-id",
    }
}

decof_node! {
    pub struct Laser {
        dpss: Dpss2 = "dpss",
        nlo: Nlo = "nlo",
        uv: UvShg = "uv",
        pd_ext: PdExt = "pd-ext",
        amp: LaserAmp = "amp",
        scan: ScanGenerator = "scan",
        type_: DecofString = "type",
        scope: ScopeT = "scope",
        ctl: CtlT = "ctl",
        wide_scan: WideScan = "wide-scan",
        health_txt: DecofString = "health-txt",
        power_stabilization: PwrStab = "power-stabilization",
        dl: LaserHead = "dl",
        recorder: Recorder = "recorder",
        product_name: DecofString = "product-name",
        diagnosis: LaserDiagnosis = "diagnosis",
        config: LaserConfig = "config",
        health: DecofInteger = "health",
        emission: DecofBoolean = "emission",
    }
}

impl Laser {
    pub async fn load_head(&self) -> Result<()> {
        self.node.exec("load-head", &[]).await
    }

    pub async fn save(&self) -> Result<()> {
        self.node.exec("save", &[]).await
    }

    pub async fn load(&self) -> Result<()> {
        self.node.exec("load", &[]).await
    }
}

decof_node! {
    pub struct Dpss2 {
        error_code: DecofInteger = "error-code",
        status: DecofInteger = "status",
        tc_status_txt: DecofString = "tc-status-txt",
        tc_status: DecofInteger = "tc-status",
        current_act: DecofReal = "current-act",
        error_txt: DecofString = "error-txt",
        power_set: MutableDecofReal = "power-set",
        power_act: DecofReal = "power-act",
        status_txt: DecofString = "status-txt",
        operation_time: DecofReal = "operation-time",
        power_max: DecofReal = "power-max",
        current_max: DecofReal = "current-max",
        enabled: MutableDecofBoolean = "enabled",
        power_margin: DecofReal = "power-margin",
    }
}

decof_node! {
    pub struct Nlo {
        auto_nlo: AutoNlo = "auto-nlo",
        fhg: Fhg = "fhg",
        pd: NloPhotoDiodes = "pd",
        shg: Shg = "shg",
        servo: NloLaserHeadServos = "servo",
        ssw_ver: DecofString = "ssw-ver",
        power_optimization: NloLaserHeadPowerOptimization = "power-optimization",
    }
}

decof_node! {
    pub struct AutoNlo {
        laser_on: MutableDecofBoolean = "laser-on",
        amplifier_current_margin: DecofReal = "amplifier-current-margin",
        operation_time_amplifier: DecofReal = "operation-time-amplifier",
        operation_time_master: DecofReal = "operation-time-master",
        operation_time_cavity: DecofReal = "operation-time-cavity",
        automatic_mode: MutableDecofBoolean = "automatic-mode",
        emission: DecofBoolean = "emission",
    }
}

impl AutoNlo {
    pub async fn perform_single_mode_optimization(&self) -> Result<()> {
        self.node.exec("perform-single-mode-optimization", &[]).await
    }

    pub async fn perform_auto_align(&self) -> Result<()> {
        self.node.exec("perform-auto-align", &[]).await
    }

    pub async fn reset_operation_time_cavity(&self) -> Result<()> {
        self.node.exec("reset-operation-time-cavity", &[]).await
    }
}

decof_node! {
    pub struct Fhg {
        scan: NloLaserHeadSiggen2 = "scan",
        scope: NloLaserHeadScopeT2 = "scope",
        factory_settings: FhgFactorySettings = "factory-settings",
        pc: PiezoDrv2 = "pc",
        lock: NloLaserHeadLockFhg = "lock",
        tc: TcChannel2 = "tc",
    }
}

impl Fhg {
    pub async fn restore(&self) -> Result<()> {
        self.node.exec("restore", &[]).await
    }

    pub async fn store(&self) -> Result<()> {
        self.node.exec("store", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadSiggen2 {
        enabled: MutableDecofBoolean = "enabled",
        frequency: MutableDecofReal = "frequency",
        amplitude: MutableDecofReal = "amplitude",
        offset: MutableDecofReal = "offset",
    }
}

decof_node! {
    pub struct NloLaserHeadScopeT2 {
        timescale: MutableDecofReal = "timescale",
        data: DecofBinary = "data",
        channel1: NloLaserHeadScopeChannelT2 = "channel1",
        channel2: NloLaserHeadScopeChannelT2 = "channel2",
        variant: MutableDecofInteger = "variant",
        update_rate: MutableDecofInteger = "update-rate",
        channelx: NloLaserHeadScopeXAxisT2 = "channelx",
    }
}

decof_node! {
    pub struct NloLaserHeadScopeChannelT2 {
        name: DecofString = "name",
        signal: MutableDecofInteger = "signal",
        enabled: MutableDecofBoolean = "enabled",
        unit: DecofString = "unit",
    }
}

decof_node! {
    pub struct NloLaserHeadScopeXAxisT2 {
        name: DecofString = "name",
        xy_signal: MutableDecofInteger = "xy-signal",
        spectrum_omit_dc: MutableDecofBoolean = "spectrum-omit-dc",
        scope_timescale: MutableDecofReal = "scope-timescale",
        unit: DecofString = "unit",
        spectrum_range: MutableDecofReal = "spectrum-range",
    }
}

decof_node! {
    pub struct FhgFactorySettings {
        pd: NloLaserHeadFhgPhotodiodesFactorySettings = "pd",
        tc: NloLaserHeadTcFactorySettings = "tc",
        modified: DecofBoolean = "modified",
        pc: NloLaserHeadPcFactorySettings = "pc",
        lock: NloLaserHeadLockFactorySettings = "lock",
    }
}

impl FhgFactorySettings {
    pub async fn retrieve_now(&self) -> Result<()> {
        self.node.exec("retrieve-now", &[]).await
    }

    pub async fn apply(&self) -> Result<()> {
        self.node.exec("apply", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadFhgPhotodiodesFactorySettings {
        pdh_dc: NloLaserHeadPdDigilockFactorySettings = "pdh-dc",
        fhg: NloLaserHeadPdFactorySettings1 = "fhg",
        pdh_rf: NloLaserHeadPdPdhFactorySettings = "pdh-rf",
        int: NloLaserHeadPdDigilockFactorySettings = "int",
    }
}

decof_node! {
    pub struct NloLaserHeadPdDigilockFactorySettings {
        cal_offset: MutableDecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct NloLaserHeadPdFactorySettings1 {
        cal_factor: MutableDecofReal = "cal-factor",
        cal_offset: MutableDecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct NloLaserHeadPdPdhFactorySettings {
        gain: MutableDecofReal = "gain",
    }
}

decof_node! {
    pub struct NloLaserHeadTcFactorySettings {
        timeout: MutableDecofInteger = "timeout",
        power_source: MutableDecofInteger = "power-source",
        temp_min: MutableDecofReal = "temp-min",
        ok_time: MutableDecofReal = "ok-time",
        temp_set: MutableDecofReal = "temp-set",
        ntc_series_resistance: MutableDecofReal = "ntc-series-resistance",
        current_min: MutableDecofReal = "current-min",
        temp_roc_limit: MutableDecofReal = "temp-roc-limit",
        d_gain: MutableDecofReal = "d-gain",
        ok_tolerance: MutableDecofReal = "ok-tolerance",
        p_gain: MutableDecofReal = "p-gain",
        c_gain: MutableDecofReal = "c-gain",
        current_max: MutableDecofReal = "current-max",
        temp_max: MutableDecofReal = "temp-max",
        i_gain: MutableDecofReal = "i-gain",
        temp_roc_enabled: MutableDecofBoolean = "temp-roc-enabled",
    }
}

decof_node! {
    pub struct NloLaserHeadPcFactorySettings {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        scan_frequency: MutableDecofReal = "scan-frequency",
        feedforward_enabled: MutableDecofBoolean = "feedforward-enabled",
        scan_offset: MutableDecofReal = "scan-offset",
        capacitance: MutableDecofReal = "capacitance",
        voltage_max: MutableDecofReal = "voltage-max",
        scan_amplitude: MutableDecofReal = "scan-amplitude",
        voltage_min: MutableDecofReal = "voltage-min",
    }
}

decof_node! {
    pub struct NloLaserHeadLockFactorySettings {
        setpoint: MutableDecofReal = "setpoint",
        pid2_gain: NloLaserHeadPidGainFactorySettings = "pid2-gain",
        local_oscillator: NloLaserHeadLocalOscillatorFactorySettings = "local-oscillator",
        pid_selection: MutableDecofInteger = "pid-selection",
        relock: NloLaserHeadRelockFactorySettings = "relock",
        window: NloLaserHeadLockWindowFactorySettings = "window",
        analog_p_gain: MutableDecofReal = "analog-p-gain",
        pid1_gain: NloLaserHeadPidGainFactorySettings = "pid1-gain",
    }
}

decof_node! {
    pub struct NloLaserHeadPidGainFactorySettings {
        i_cutoff: MutableDecofReal = "i-cutoff",
        i: MutableDecofReal = "i",
        p: MutableDecofReal = "p",
        i_cutoff_enabled: MutableDecofBoolean = "i-cutoff-enabled",
        d: MutableDecofReal = "d",
        all: MutableDecofReal = "all",
    }
}

decof_node! {
    pub struct NloLaserHeadLocalOscillatorFactorySettings {
        coupled_modulation: MutableDecofBoolean = "coupled-modulation",
        use_fast_oscillator: MutableDecofBoolean = "use-fast-oscillator",
        attenuation_fhg_raw: MutableDecofInteger = "attenuation-fhg-raw",
        phase_shift_fhg: MutableDecofReal = "phase-shift-fhg",
        enabled: MutableDecofBoolean = "enabled",
        attenuation_shg_raw: MutableDecofInteger = "attenuation-shg-raw",
        phase_shift_shg: MutableDecofReal = "phase-shift-shg",
    }
}

decof_node! {
    pub struct NloLaserHeadRelockFactorySettings {
        frequency: MutableDecofReal = "frequency",
        amplitude: MutableDecofReal = "amplitude",
        enabled: MutableDecofBoolean = "enabled",
        delay: MutableDecofReal = "delay",
    }
}

decof_node! {
    pub struct NloLaserHeadLockWindowFactorySettings {
        input_channel: MutableDecofInteger = "input-channel",
        threshold: MutableDecofReal = "threshold",
        level_hysteresis: MutableDecofReal = "level-hysteresis",
    }
}

decof_node! {
    pub struct PiezoDrv2 {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        status: DecofInteger = "status",
        feedforward_enabled: MutableDecofBoolean = "feedforward-enabled",
        path: DecofString = "path",
        external_input: ExtInput2 = "external-input",
        enabled: MutableDecofBoolean = "enabled",
        voltage_min: MutableDecofReal = "voltage-min",
        feedforward_master: MutableDecofInteger = "feedforward-master",
        voltage_set: MutableDecofReal = "voltage-set",
        output_filter: OutputFilter2 = "output-filter",
        voltage_max: MutableDecofReal = "voltage-max",
        heatsink_temp: DecofReal = "heatsink-temp",
        status_txt: DecofString = "status-txt",
        voltage_act: DecofReal = "voltage-act",
        voltage_set_dithering: MutableDecofBoolean = "voltage-set-dithering",
    }
}

decof_node! {
    pub struct ExtInput2 {
        signal: MutableDecofInteger = "signal",
        enabled: MutableDecofBoolean = "enabled",
        factor: MutableDecofReal = "factor",
    }
}

decof_node! {
    pub struct OutputFilter2 {
        slew_rate_limited: DecofBoolean = "slew-rate-limited",
        slew_rate: MutableDecofReal = "slew-rate",
        slew_rate_enabled: MutableDecofBoolean = "slew-rate-enabled",
    }
}

decof_node! {
    pub struct NloLaserHeadLockFhg {
        setpoint: MutableDecofReal = "setpoint",
        pid1: NloLaserHeadPid2 = "pid1",
        local_oscillator: NloLaserHeadLocalOscillatorFhg = "local-oscillator",
        state_txt: DecofString = "state-txt",
        relock: NloLaserHeadRelock2 = "relock",
        window: NloLaserHeadWindow2 = "window",
        pid2: NloLaserHeadPid2 = "pid2",
        cavity_slow_pzt_voltage: MutableDecofReal = "cavity-slow-pzt-voltage",
        lock_enabled: MutableDecofBoolean = "lock-enabled",
        cavity_fast_pzt_voltage: MutableDecofReal = "cavity-fast-pzt-voltage",
        pid_selection: MutableDecofInteger = "pid-selection",
        background_trace: DecofBinary = "background-trace",
        state: DecofInteger = "state",
    }
}

decof_node! {
    pub struct NloLaserHeadPid2 {
        gain: NloLaserHeadGain2 = "gain",
    }
}

decof_node! {
    pub struct NloLaserHeadGain2 {
        p: MutableDecofReal = "p",
        i_cutoff: MutableDecofReal = "i-cutoff",
        i: MutableDecofReal = "i",
        i_cutoff_enabled: MutableDecofBoolean = "i-cutoff-enabled",
        d: MutableDecofReal = "d",
        all: MutableDecofReal = "all",
    }
}

decof_node! {
    pub struct NloLaserHeadLocalOscillatorFhg {
        enabled: MutableDecofBoolean = "enabled",
        use_fast_oscillator: MutableDecofBoolean = "use-fast-oscillator",
        attenuation_raw: MutableDecofInteger = "attenuation-raw",
        coupled_modulation: MutableDecofBoolean = "coupled-modulation",
        phase_shift: MutableDecofReal = "phase-shift",
        amplitude: MutableDecofReal = "amplitude",
    }
}

impl NloLaserHeadLocalOscillatorFhg {
    pub async fn auto_pdh(&self) -> Result<()> {
        self.node.exec("auto-pdh", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadRelock2 {
        enabled: MutableDecofBoolean = "enabled",
        delay: MutableDecofReal = "delay",
        frequency: MutableDecofReal = "frequency",
        amplitude: MutableDecofReal = "amplitude",
    }
}

decof_node! {
    pub struct NloLaserHeadWindow2 {
        threshold: MutableDecofReal = "threshold",
        input_channel: MutableDecofInteger = "input-channel",
        calibration: NloLaserHeadWindowCalibration2 = "calibration",
        level_hysteresis: MutableDecofReal = "level-hysteresis",
    }
}

decof_node! {
    pub struct NloLaserHeadWindowCalibration2 {
        power_min: MutableDecofReal = "power-min",
        power_max: MutableDecofReal = "power-max",
        threshold_min: MutableDecofReal = "threshold-min",
        threshold_max: MutableDecofReal = "threshold-max",
    }
}

decof_node! {
    pub struct TcChannel2 {
        drv_voltage: DecofReal = "drv-voltage",
        power_source: DecofInteger = "power-source",
        status: DecofInteger = "status",
        ntc_parallel_resistance: DecofReal = "ntc-parallel-resistance",
        fault: DecofBoolean = "fault",
        path: DecofString = "path",
        external_input: ExtInput2 = "external-input",
        current_act: DecofReal = "current-act",
        current_set: DecofReal = "current-set",
        temp_set_max: MutableDecofReal = "temp-set-max",
        t_loop: TcChannelTLoop2 = "t-loop",
        enabled: MutableDecofBoolean = "enabled",
        voltage_act: DecofReal = "voltage-act",
        limits: TcChannelCheck2 = "limits",
        current_set_max: MutableDecofReal = "current-set-max",
        c_loop: TcChannelCLoop2 = "c-loop",
        ntc_series_resistance: DecofReal = "ntc-series-resistance",
        temp_roc_limit: MutableDecofReal = "temp-roc-limit",
        ready: DecofBoolean = "ready",
        temp_set_min: MutableDecofReal = "temp-set-min",
        status_txt: DecofString = "status-txt",
        resistance: DecofReal = "resistance",
        temp_reset: MutableDecofBoolean = "temp-reset",
        current_set_min: MutableDecofReal = "current-set-min",
        temp_set: MutableDecofReal = "temp-set",
        temp_act: DecofReal = "temp-act",
        temp_roc_enabled: MutableDecofBoolean = "temp-roc-enabled",
    }
}

impl TcChannel2 {
    pub async fn check_peltier(&self) -> Result<f64> {
        self.node.exec_returning("check-peltier", &[]).await
    }
}

decof_node! {
    pub struct TcChannelTLoop2 {
        ok_tolerance: MutableDecofReal = "ok-tolerance",
        p_gain: MutableDecofReal = "p-gain",
        ok_time: MutableDecofReal = "ok-time",
        i_gain: MutableDecofReal = "i-gain",
        on: MutableDecofBoolean = "on",
        d_gain: MutableDecofReal = "d-gain",
    }
}

decof_node! {
    pub struct TcChannelCheck2 {
        timeout: MutableDecofInteger = "timeout",
        out_of_range: DecofBoolean = "out-of-range",
        timed_out: DecofBoolean = "timed-out",
        temp_max: MutableDecofReal = "temp-max",
        temp_min: MutableDecofReal = "temp-min",
    }
}

decof_node! {
    pub struct TcChannelCLoop2 {
        i_gain: MutableDecofReal = "i-gain",
        on: MutableDecofBoolean = "on",
    }
}

decof_node! {
    pub struct NloPhotoDiodes {
        fhg_pdh_dc: NloLaserHeadNloDigilockPhotodiode2 = "fhg-pdh-dc",
        fhg: NloLaserHeadNloPhotodiode2 = "fhg",
        shg_input: PdCal = "shg-input",
        shg_pdh_rf: NloLaserHeadNloPdhPhotodiode2 = "shg-pdh-rf",
        shg: NloLaserHeadNloPhotodiode2 = "shg",
        fiber: NloLaserHeadNloPhotodiode2 = "fiber",
        fhg_pdh_rf: NloLaserHeadNloPdhPhotodiode2 = "fhg-pdh-rf",
        shg_int: NloLaserHeadNloDigilockPhotodiode2 = "shg-int",
        amp: NloLaserHeadNloPhotodiode2 = "amp",
        dl: NloLaserHeadNloPhotodiode2 = "dl",
        fhg_int: NloLaserHeadNloDigilockPhotodiode2 = "fhg-int",
        shg_pdh_dc: NloLaserHeadNloDigilockPhotodiode2 = "shg-pdh-dc",
    }
}

decof_node! {
    pub struct NloLaserHeadNloDigilockPhotodiode2 {
        photodiode: DecofReal = "photodiode",
        cal_offset: MutableDecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct NloLaserHeadNloPhotodiode2 {
        photodiode: DecofReal = "photodiode",
        cal_factor: MutableDecofReal = "cal-factor",
        power: DecofReal = "power",
        cal_offset: MutableDecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct PdCal {
        photodiode: DecofReal = "photodiode",
        cal_factor: MutableDecofReal = "cal-factor",
        power: DecofReal = "power",
        cal_offset: MutableDecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct NloLaserHeadNloPdhPhotodiode2 {
        photodiode: DecofReal = "photodiode",
        gain: MutableDecofReal = "gain",
    }
}

decof_node! {
    pub struct Shg {
        scan: NloLaserHeadSiggen2 = "scan",
        scope: NloLaserHeadScopeT2 = "scope",
        pc: PiezoDrv2 = "pc",
        lock: NloLaserHeadLockShg2 = "lock",
        tc: TcChannel2 = "tc",
        factory_settings: ShgFactorySettings = "factory-settings",
    }
}

impl Shg {
    pub async fn restore(&self) -> Result<()> {
        self.node.exec("restore", &[]).await
    }

    pub async fn store(&self) -> Result<()> {
        self.node.exec("store", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadLockShg2 {
        setpoint: MutableDecofReal = "setpoint",
        pid1: NloLaserHeadPid2 = "pid1",
        local_oscillator: NloLaserHeadLocalOscillatorShg2 = "local-oscillator",
        state_txt: DecofString = "state-txt",
        analog_dl_gain: NloLaserHeadMinifalc2 = "analog-dl-gain",
        background_trace: DecofBinary = "background-trace",
        window: NloLaserHeadWindow2 = "window",
        pid2: NloLaserHeadPid2 = "pid2",
        cavity_slow_pzt_voltage: MutableDecofReal = "cavity-slow-pzt-voltage",
        lock_enabled: MutableDecofBoolean = "lock-enabled",
        cavity_fast_pzt_voltage: MutableDecofReal = "cavity-fast-pzt-voltage",
        pid_selection: MutableDecofInteger = "pid-selection",
        relock: NloLaserHeadRelock2 = "relock",
        state: DecofInteger = "state",
    }
}

decof_node! {
    pub struct NloLaserHeadLocalOscillatorShg2 {
        use_external_oscillator: MutableDecofBoolean = "use-external-oscillator",
        enabled: MutableDecofBoolean = "enabled",
        use_fast_oscillator: MutableDecofBoolean = "use-fast-oscillator",
        attenuation_raw: MutableDecofInteger = "attenuation-raw",
        coupled_modulation: MutableDecofBoolean = "coupled-modulation",
        phase_shift: MutableDecofReal = "phase-shift",
        amplitude: MutableDecofReal = "amplitude",
    }
}

impl NloLaserHeadLocalOscillatorShg2 {
    pub async fn auto_pdh(&self) -> Result<()> {
        self.node.exec("auto-pdh", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadMinifalc2 {
        p_gain: MutableDecofReal = "p-gain",
    }
}

decof_node! {
    pub struct ShgFactorySettings {
        auto_nlo: NloLaserHeadAutoNloFactorySettings = "auto-nlo",
        modified: DecofBoolean = "modified",
        pc: NloLaserHeadPcFactorySettings = "pc",
        lock: NloLaserHeadLockFactorySettings = "lock",
        pd: NloLaserHeadShgPhotodiodesFactorySettings = "pd",
        tc: NloLaserHeadTcFactorySettings = "tc",
    }
}

impl ShgFactorySettings {
    pub async fn retrieve_now(&self) -> Result<()> {
        self.node.exec("retrieve-now", &[]).await
    }

    pub async fn apply(&self) -> Result<()> {
        self.node.exec("apply", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadAutoNloFactorySettings {
        optimization_settings: NloLaserHeadAutoNloOptFactorySettings = "optimization-settings",
    }
}

decof_node! {
    pub struct NloLaserHeadAutoNloOptFactorySettings {
        auto_align_enabled: MutableDecofBoolean = "auto-align-enabled",
        pressure_compensation_enabled: MutableDecofBoolean = "pressure-compensation-enabled",
        single_mode_optimization_enabled: MutableDecofBoolean = "single-mode-optimization-enabled",
    }
}

decof_node! {
    pub struct NloLaserHeadShgPhotodiodesFactorySettings {
        shg_input: NloLaserHeadPdFactorySettings2 = "shg-input",
        pdh_rf: NloLaserHeadPdPdhFactorySettings = "pdh-rf",
        int: NloLaserHeadPdDigilockFactorySettings = "int",
        shg: NloLaserHeadPdFactorySettings1 = "shg",
        fiber: NloLaserHeadPdFactorySettings1 = "fiber",
        pdh_dc: NloLaserHeadPdDigilockFactorySettings = "pdh-dc",
    }
}

decof_node! {
    pub struct NloLaserHeadPdFactorySettings2 {
        cal_factor: MutableDecofReal = "cal-factor",
        cal_offset: MutableDecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct NloLaserHeadServos {
        ta2_vert: NloLaserHeadServoPwm2 = "ta2-vert",
        ta1_hor: NloLaserHeadServoPwm2 = "ta1-hor",
        uv_cryst: NloLaserHeadServoPwm2 = "uv-cryst",
        shg2_vert: NloLaserHeadServoPwm2 = "shg2-vert",
        fiber1_hor: NloLaserHeadServoPwm2 = "fiber1-hor",
        shg2_hor: NloLaserHeadServoPwm2 = "shg2-hor",
        shg1_vert: NloLaserHeadServoPwm2 = "shg1-vert",
        fhg1_hor: NloLaserHeadServoPwm2 = "fhg1-hor",
        ta2_hor: NloLaserHeadServoPwm2 = "ta2-hor",
        fiber2_vert: NloLaserHeadServoPwm2 = "fiber2-vert",
        fhg2_hor: NloLaserHeadServoPwm2 = "fhg2-hor",
        fhg2_vert: NloLaserHeadServoPwm2 = "fhg2-vert",
        shg1_hor: NloLaserHeadServoPwm2 = "shg1-hor",
        uv_outcpl: NloLaserHeadServoPwm2 = "uv-outcpl",
        ta1_vert: NloLaserHeadServoPwm2 = "ta1-vert",
        fiber1_vert: NloLaserHeadServoPwm2 = "fiber1-vert",
        fhg1_vert: NloLaserHeadServoPwm2 = "fhg1-vert",
        fiber2_hor: NloLaserHeadServoPwm2 = "fiber2-hor",
    }
}

impl NloLaserHeadServos {
    pub async fn center_shg_servos(&self) -> Result<()> {
        self.node.exec("center-shg-servos", &[]).await
    }

    pub async fn center_fhg_servos(&self) -> Result<()> {
        self.node.exec("center-fhg-servos", &[]).await
    }

    pub async fn center_all_servos(&self) -> Result<()> {
        self.node.exec("center-all-servos", &[]).await
    }

    pub async fn center_ta_servos(&self) -> Result<()> {
        self.node.exec("center-ta-servos", &[]).await
    }

    pub async fn center_fiber_servos(&self) -> Result<()> {
        self.node.exec("center-fiber-servos", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadServoPwm2 {
        display_name: DecofString = "display-name",
        enabled: MutableDecofBoolean = "enabled",
        value: MutableDecofInteger = "value",
    }
}

impl NloLaserHeadServoPwm2 {
    pub async fn center_servo(&self) -> Result<()> {
        self.node.exec("center-servo", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadPowerOptimization {
        progress_data_amp: DecofBinary = "progress-data-amp",
        stage4: NloLaserHeadStage2 = "stage4",
        progress: DecofInteger = "progress",
        ongoing: DecofBoolean = "ongoing",
        shg_advanced: MutableDecofBoolean = "shg-advanced",
        status: DecofInteger = "status",
        progress_data_fhg: DecofBinary = "progress-data-fhg",
        stage1: NloLaserHeadStage2 = "stage1",
        stage3: NloLaserHeadStage2 = "stage3",
        progress_data_shg: DecofBinary = "progress-data-shg",
        abort: MutableDecofBoolean = "abort",
        progress_data_fiber: DecofBinary = "progress-data-fiber",
        stage5: NloLaserHeadStage2 = "stage5",
        stage2: NloLaserHeadStage2 = "stage2",
        status_string: DecofString = "status-string",
    }
}

impl NloLaserHeadPowerOptimization {
    pub async fn start_optimization_all(&self) -> Result<i64> {
        self.node.exec_returning("start-optimization-all", &[]).await
    }

    pub async fn start_optimization_shg(&self) -> Result<i64> {
        self.node.exec_returning("start-optimization-shg", &[]).await
    }

    pub async fn start_optimization_fiber(&self) -> Result<i64> {
        self.node.exec_returning("start-optimization-fiber", &[]).await
    }

    pub async fn start_optimization_amp(&self) -> Result<i64> {
        self.node.exec_returning("start-optimization-amp", &[]).await
    }

    pub async fn start_optimization_fhg(&self) -> Result<i64> {
        self.node.exec_returning("start-optimization-fhg", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadStage2 {
        restore_on_abort: MutableDecofBoolean = "restore-on-abort",
        autosave_actuator_values: MutableDecofBoolean = "autosave-actuator-values",
        regress_tolerance: MutableDecofInteger = "regress-tolerance",
        progress: DecofInteger = "progress",
        optimization_in_progress: DecofBoolean = "optimization-in-progress",
        input: NloLaserHeadOptInput2 = "input",
        restore_on_regress: MutableDecofBoolean = "restore-on-regress",
    }
}

impl NloLaserHeadStage2 {
    pub async fn start_optimization(&self) -> Result<i64> {
        self.node.exec_returning("start-optimization", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadOptInput2 {
        value_calibrated: DecofReal = "value-calibrated",
    }
}

decof_node! {
    pub struct UvShg {
        remaining_optics_spots: DecofInteger = "remaining-optics-spots",
        error: DecofInteger = "error",
        status: DecofInteger = "status",
        servo: NloLaserHeadUvServos = "servo",
        eom: UvEom = "eom",
        hwp_transmittance: DecofReal = "hwp-transmittance",
        ssw_ver: DecofString = "ssw-ver",
        pump: Dpss1 = "pump",
        operation_time: DecofReal = "operation-time",
        power_margin: DecofReal = "power-margin",
        specs_fulfilled: DecofBoolean = "specs-fulfilled",
        scope: NloLaserHeadScopeT1 = "scope",
        scan: NloLaserHeadSiggen1 = "scan",
        baseplate_temperature: DecofReal = "baseplate-temperature",
        error_txt: DecofString = "error-txt",
        power_optimization: UvShgPowerOptimization = "power-optimization",
        power_stabilization: UvShgPowerStabilization = "power-stabilization",
        status_parameters: UvStatusParameters = "status-parameters",
        status_txt: DecofString = "status-txt",
        factory_settings: UvFactorySettings = "factory-settings",
        lock: NloLaserHeadLockShg1 = "lock",
        pd: NloLaserHeadUvPhotoDiodes = "pd",
        cavity: UvCavity = "cavity",
        crystal: UvCrystal = "crystal",
    }
}

impl UvShg {
    pub async fn clear_errors(&self) -> Result<()> {
        self.node.exec("clear-errors", &[]).await
    }

    pub async fn perform_optics_shift(&self) -> Result<()> {
        self.node.exec("perform-optics-shift", &[]).await
    }

    pub async fn restore(&self) -> Result<()> {
        self.node.exec("restore", &[]).await
    }

    pub async fn store(&self) -> Result<()> {
        self.node.exec("store", &[]).await
    }

    pub async fn perform_optimization(&self) -> Result<()> {
        self.node.exec("perform-optimization", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadUvServos {
        comp_vert: NloLaserHeadServoPwm1 = "comp-vert",
        shg2_vert: NloLaserHeadServoPwm1 = "shg2-vert",
        hwp: NloLaserHeadServoPwm1 = "hwp",
        lens: NloLaserHeadServoPwm1 = "lens",
        cryst: NloLaserHeadServoPwm1 = "cryst",
        shg1_hor: NloLaserHeadServoPwm1 = "shg1-hor",
        shg2_hor: NloLaserHeadServoPwm1 = "shg2-hor",
        shg1_vert: NloLaserHeadServoPwm1 = "shg1-vert",
        comp_hor: NloLaserHeadServoPwm1 = "comp-hor",
        outcpl: NloLaserHeadServoPwm1 = "outcpl",
    }
}

decof_node! {
    pub struct NloLaserHeadServoPwm1 {
        display_name: DecofString = "display-name",
        enabled: DecofBoolean = "enabled",
        value: DecofInteger = "value",
    }
}

decof_node! {
    pub struct UvEom {
        tc: TcChannel1 = "tc",
    }
}

decof_node! {
    pub struct TcChannel1 {
        drv_voltage: DecofReal = "drv-voltage",
        power_source: DecofInteger = "power-source",
        status: DecofInteger = "status",
        ntc_parallel_resistance: DecofReal = "ntc-parallel-resistance",
        fault: DecofBoolean = "fault",
        path: DecofString = "path",
        external_input: ExtInput1 = "external-input",
        current_act: DecofReal = "current-act",
        current_set: DecofReal = "current-set",
        temp_set_max: DecofReal = "temp-set-max",
        t_loop: TcChannelTLoop1 = "t-loop",
        enabled: DecofBoolean = "enabled",
        voltage_act: DecofReal = "voltage-act",
        limits: TcChannelCheck1 = "limits",
        current_set_max: DecofReal = "current-set-max",
        c_loop: TcChannelCLoop1 = "c-loop",
        ntc_series_resistance: DecofReal = "ntc-series-resistance",
        temp_roc_limit: DecofReal = "temp-roc-limit",
        ready: DecofBoolean = "ready",
        temp_set_min: DecofReal = "temp-set-min",
        status_txt: DecofString = "status-txt",
        resistance: DecofReal = "resistance",
        temp_reset: DecofBoolean = "temp-reset",
        current_set_min: DecofReal = "current-set-min",
        temp_set: DecofReal = "temp-set",
        temp_act: DecofReal = "temp-act",
        temp_roc_enabled: DecofBoolean = "temp-roc-enabled",
    }
}

decof_node! {
    pub struct ExtInput1 {
        signal: DecofInteger = "signal",
        enabled: DecofBoolean = "enabled",
        factor: DecofReal = "factor",
    }
}

decof_node! {
    pub struct TcChannelTLoop1 {
        ok_tolerance: DecofReal = "ok-tolerance",
        p_gain: DecofReal = "p-gain",
        ok_time: DecofReal = "ok-time",
        i_gain: DecofReal = "i-gain",
        on: DecofBoolean = "on",
        d_gain: DecofReal = "d-gain",
    }
}

decof_node! {
    pub struct TcChannelCheck1 {
        timeout: DecofInteger = "timeout",
        out_of_range: DecofBoolean = "out-of-range",
        timed_out: DecofBoolean = "timed-out",
        temp_max: DecofReal = "temp-max",
        temp_min: DecofReal = "temp-min",
    }
}

decof_node! {
    pub struct TcChannelCLoop1 {
        i_gain: DecofReal = "i-gain",
        on: DecofBoolean = "on",
    }
}

decof_node! {
    pub struct Dpss1 {
        error_code: DecofInteger = "error-code",
        status: DecofInteger = "status",
        tc_status_txt: DecofString = "tc-status-txt",
        tc_status: DecofInteger = "tc-status",
        current_act: DecofReal = "current-act",
        error_txt: DecofString = "error-txt",
        power_set: DecofReal = "power-set",
        power_act: DecofReal = "power-act",
        status_txt: DecofString = "status-txt",
        operation_time: DecofReal = "operation-time",
        power_max: DecofReal = "power-max",
        current_max: DecofReal = "current-max",
        enabled: DecofBoolean = "enabled",
        power_margin: DecofReal = "power-margin",
    }
}

decof_node! {
    pub struct NloLaserHeadScopeT1 {
        timescale: DecofReal = "timescale",
        data: DecofBinary = "data",
        channel1: NloLaserHeadScopeChannelT1 = "channel1",
        channel2: NloLaserHeadScopeChannelT1 = "channel2",
        variant: DecofInteger = "variant",
        update_rate: DecofInteger = "update-rate",
        channelx: NloLaserHeadScopeXAxisT1 = "channelx",
    }
}

decof_node! {
    pub struct NloLaserHeadScopeChannelT1 {
        name: DecofString = "name",
        signal: DecofInteger = "signal",
        enabled: DecofBoolean = "enabled",
        unit: DecofString = "unit",
    }
}

decof_node! {
    pub struct NloLaserHeadScopeXAxisT1 {
        name: DecofString = "name",
        xy_signal: DecofInteger = "xy-signal",
        spectrum_omit_dc: DecofBoolean = "spectrum-omit-dc",
        scope_timescale: DecofReal = "scope-timescale",
        unit: DecofString = "unit",
        spectrum_range: DecofReal = "spectrum-range",
    }
}

decof_node! {
    pub struct NloLaserHeadSiggen1 {
        enabled: DecofBoolean = "enabled",
        frequency: DecofReal = "frequency",
        amplitude: DecofReal = "amplitude",
        offset: DecofReal = "offset",
    }
}

decof_node! {
    pub struct UvShgPowerOptimization {
        ongoing: DecofBoolean = "ongoing",
        abort: DecofBoolean = "abort",
        status: DecofInteger = "status",
        progress_data: DecofBinary = "progress-data",
        cavity: NloLaserHeadStage1 = "cavity",
        status_string: DecofString = "status-string",
    }
}

decof_node! {
    pub struct NloLaserHeadStage1 {
        restore_on_abort: DecofBoolean = "restore-on-abort",
        autosave_actuator_values: DecofBoolean = "autosave-actuator-values",
        regress_tolerance: DecofInteger = "regress-tolerance",
        progress: DecofInteger = "progress",
        optimization_in_progress: DecofBoolean = "optimization-in-progress",
        input: NloLaserHeadOptInput1 = "input",
        restore_on_regress: DecofBoolean = "restore-on-regress",
    }
}

decof_node! {
    pub struct NloLaserHeadOptInput1 {
        value_calibrated: DecofReal = "value-calibrated",
    }
}

decof_node! {
    pub struct UvShgPowerStabilization {
        gain: PwrStabGain1 = "gain",
        power_min: DecofReal = "power-min",
        update_strategy: DecofInteger = "update-strategy",
        state: DecofInteger = "state",
        power_max: DecofReal = "power-max",
        enabled: DecofBoolean = "enabled",
        power_act: DecofReal = "power-act",
        power_set: DecofReal = "power-set",
    }
}

decof_node! {
    pub struct PwrStabGain1 {
        i: DecofReal = "i",
        p: DecofReal = "p",
        all: DecofReal = "all",
        d: DecofReal = "d",
    }
}

decof_node! {
    pub struct UvStatusParameters {
        power_stabilization_strategy: DecofInteger = "power-stabilization-strategy",
        power_margin_tolerance_time: DecofInteger = "power-margin-tolerance-time",
        settle_down_delay: DecofInteger = "settle-down-delay",
        degradation_detection_measurement_interval: DecofInteger = "degradation-detection-measurement-interval",
        cavity_scan_duration: DecofInteger = "cavity-scan-duration",
        degradation_detection_slope_threshold: DecofReal = "degradation-detection-slope-threshold",
        cavity_lock_tolerance_factor: DecofInteger = "cavity-lock-tolerance-factor",
        power_margin_threshold: DecofReal = "power-margin-threshold",
        power_output_relative_error_max: DecofReal = "power-output-relative-error-max",
        power_output_relative_deviation_max: DecofReal = "power-output-relative-deviation-max",
        operational_pump_power: DecofReal = "operational-pump-power",
        power_lock_settle_time: DecofInteger = "power-lock-settle-time",
        power_stabilization_level_low_factor: DecofReal = "power-stabilization-level-low-factor",
        temperature_settle_time: DecofInteger = "temperature-settle-time",
        degradation_detection_number_of_measurements: DecofInteger = "degradation-detection-number-of-measurements",
        baseplate_temperature_limit: DecofReal = "baseplate-temperature-limit",
        cavity_lock_settle_time: DecofInteger = "cavity-lock-settle-time",
        pump_lock_settle_time: DecofInteger = "pump-lock-settle-time",
    }
}

decof_node! {
    pub struct UvFactorySettings {
        modified: DecofBoolean = "modified",
        cavity_tc: NloLaserHeadTcFactorySettings = "cavity-tc",
        pc: NloLaserHeadPcFactorySettings = "pc",
        lock: NloLaserHeadLockFactorySettings = "lock",
        pd: NloLaserHeadUvPhotodiodesFactorySettings = "pd",
        crystal_tc: NloLaserHeadTcFactorySettings = "crystal-tc",
        eom_tc: NloLaserHeadTcFactorySettings = "eom-tc",
    }
}

impl UvFactorySettings {
    pub async fn retrieve_now(&self) -> Result<()> {
        self.node.exec("retrieve-now", &[]).await
    }

    pub async fn apply(&self) -> Result<()> {
        self.node.exec("apply", &[]).await
    }
}

decof_node! {
    pub struct NloLaserHeadUvPhotodiodesFactorySettings {
        shg: NloLaserHeadPdFactorySettings1 = "shg",
        pdh_rf: NloLaserHeadPdPdhFactorySettings = "pdh-rf",
        pdh_dc: NloLaserHeadPdDigilockFactorySettings = "pdh-dc",
    }
}

decof_node! {
    pub struct NloLaserHeadLockShg1 {
        setpoint: DecofReal = "setpoint",
        pid1: NloLaserHeadPid1 = "pid1",
        local_oscillator: NloLaserHeadLocalOscillatorShg1 = "local-oscillator",
        state_txt: DecofString = "state-txt",
        analog_dl_gain: NloLaserHeadMinifalc1 = "analog-dl-gain",
        background_trace: DecofBinary = "background-trace",
        window: NloLaserHeadWindow1 = "window",
        pid2: NloLaserHeadPid1 = "pid2",
        cavity_slow_pzt_voltage: DecofReal = "cavity-slow-pzt-voltage",
        lock_enabled: DecofBoolean = "lock-enabled",
        cavity_fast_pzt_voltage: DecofReal = "cavity-fast-pzt-voltage",
        pid_selection: DecofInteger = "pid-selection",
        relock: NloLaserHeadRelock1 = "relock",
        state: DecofInteger = "state",
    }
}

decof_node! {
    pub struct NloLaserHeadPid1 {
        gain: NloLaserHeadGain1 = "gain",
    }
}

decof_node! {
    pub struct NloLaserHeadGain1 {
        p: DecofReal = "p",
        i_cutoff: DecofReal = "i-cutoff",
        i: DecofReal = "i",
        i_cutoff_enabled: DecofBoolean = "i-cutoff-enabled",
        d: DecofReal = "d",
        all: DecofReal = "all",
    }
}

decof_node! {
    pub struct NloLaserHeadLocalOscillatorShg1 {
        use_external_oscillator: DecofBoolean = "use-external-oscillator",
        enabled: DecofBoolean = "enabled",
        use_fast_oscillator: DecofBoolean = "use-fast-oscillator",
        attenuation_raw: DecofInteger = "attenuation-raw",
        coupled_modulation: DecofBoolean = "coupled-modulation",
        phase_shift: DecofReal = "phase-shift",
        amplitude: DecofReal = "amplitude",
    }
}

decof_node! {
    pub struct NloLaserHeadMinifalc1 {
        p_gain: DecofReal = "p-gain",
    }
}

decof_node! {
    pub struct NloLaserHeadWindow1 {
        threshold: DecofReal = "threshold",
        input_channel: DecofInteger = "input-channel",
        calibration: NloLaserHeadWindowCalibration1 = "calibration",
        level_hysteresis: DecofReal = "level-hysteresis",
    }
}

decof_node! {
    pub struct NloLaserHeadWindowCalibration1 {
        power_min: DecofReal = "power-min",
        power_max: DecofReal = "power-max",
        threshold_min: DecofReal = "threshold-min",
        threshold_max: DecofReal = "threshold-max",
    }
}

decof_node! {
    pub struct NloLaserHeadRelock1 {
        enabled: DecofBoolean = "enabled",
        delay: DecofReal = "delay",
        frequency: DecofReal = "frequency",
        amplitude: DecofReal = "amplitude",
    }
}

decof_node! {
    pub struct NloLaserHeadUvPhotoDiodes {
        shg: NloLaserHeadNloPhotodiode1 = "shg",
        pdh_rf: NloLaserHeadNloPdhPhotodiode1 = "pdh-rf",
        pdh_dc: NloLaserHeadNloDigilockPhotodiode1 = "pdh-dc",
    }
}

decof_node! {
    pub struct NloLaserHeadNloPhotodiode1 {
        photodiode: DecofReal = "photodiode",
        cal_factor: DecofReal = "cal-factor",
        power: DecofReal = "power",
        cal_offset: DecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct NloLaserHeadNloPdhPhotodiode1 {
        photodiode: DecofReal = "photodiode",
        gain: DecofReal = "gain",
    }
}

decof_node! {
    pub struct NloLaserHeadNloDigilockPhotodiode1 {
        photodiode: DecofReal = "photodiode",
        cal_offset: DecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct UvCavity {
        tc: TcChannel1 = "tc",
        pc: PiezoDrv1 = "pc",
    }
}

decof_node! {
    pub struct PiezoDrv1 {
        feedforward_factor: DecofReal = "feedforward-factor",
        status: DecofInteger = "status",
        feedforward_enabled: DecofBoolean = "feedforward-enabled",
        path: DecofString = "path",
        external_input: ExtInput1 = "external-input",
        enabled: DecofBoolean = "enabled",
        voltage_min: DecofReal = "voltage-min",
        feedforward_master: DecofInteger = "feedforward-master",
        voltage_set: DecofReal = "voltage-set",
        output_filter: OutputFilter1 = "output-filter",
        voltage_max: DecofReal = "voltage-max",
        heatsink_temp: DecofReal = "heatsink-temp",
        status_txt: DecofString = "status-txt",
        voltage_act: DecofReal = "voltage-act",
        voltage_set_dithering: DecofBoolean = "voltage-set-dithering",
    }
}

decof_node! {
    pub struct OutputFilter1 {
        slew_rate_limited: DecofBoolean = "slew-rate-limited",
        slew_rate: DecofReal = "slew-rate",
        slew_rate_enabled: DecofBoolean = "slew-rate-enabled",
    }
}

decof_node! {
    pub struct UvCrystal {
        optics_shifters: NloLaserHeadUvCrystalSpots = "optics-shifters",
        tc: TcChannel1 = "tc",
    }
}

decof_node! {
    pub struct NloLaserHeadUvCrystalSpots {
        remaining_spots: DecofInteger = "remaining-spots",
        current_spot: DecofInteger = "current-spot",
    }
}

decof_node! {
    pub struct PdExt {
        input_channel: MutableDecofInteger = "input-channel",
        photodiode: DecofReal = "photodiode",
        cal_factor: MutableDecofReal = "cal-factor",
        power: DecofReal = "power",
        cal_offset: MutableDecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct LaserAmp {
        seedonly_check: AmpSeedonlyCheck = "seedonly-check",
        version: DecofString = "version",
        fru_serial_number: DecofString = "fru-serial-number",
        ontime_txt: DecofString = "ontime-txt",
        tc: TcChannel2 = "tc",
        ontime: DecofInteger = "ontime",
        type_: DecofString = "type",
        output_limits: AmpPower = "output-limits",
        cc: Cc5000Drv = "cc",
        pd: AmpPd = "pd",
        seed_limits: AmpPower = "seed-limits",
        serial_number: DecofString = "serial-number",
        legacy: DecofBoolean = "legacy",
        factory_settings: AmpFactory = "factory-settings",
    }
}

impl LaserAmp {
    pub async fn restore(&self) -> Result<()> {
        self.node.exec("restore", &[]).await
    }

    pub async fn store(&self) -> Result<()> {
        self.node.exec("store", &[]).await
    }
}

decof_node! {
    pub struct AmpSeedonlyCheck {
        shutdown_delay: MutableDecofReal = "shutdown-delay",
        warning_delay: MutableDecofReal = "warning-delay",
        pump: DecofBoolean = "pump",
        status: DecofInteger = "status",
        seed: DecofBoolean = "seed",
        status_txt: DecofString = "status-txt",
    }
}

decof_node! {
    pub struct AmpPower {
        power_min: MutableDecofReal = "power-min",
        status_txt: DecofString = "status-txt",
        power_max_warning_delay: MutableDecofReal = "power-max-warning-delay",
        power_max: MutableDecofReal = "power-max",
        power_min_warning_delay: MutableDecofReal = "power-min-warning-delay",
        power_min_shutdown_delay: MutableDecofReal = "power-min-shutdown-delay",
        power: DecofReal = "power",
        status: DecofInteger = "status",
        power_max_shutdown_delay: MutableDecofReal = "power-max-shutdown-delay",
    }
}

decof_node! {
    pub struct Cc5000Drv {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        current_clip_limit: DecofReal = "current-clip-limit",
        status: DecofInteger = "status",
        feedforward_enabled: MutableDecofBoolean = "feedforward-enabled",
        path: DecofString = "path",
        current_act: DecofReal = "current-act",
        current_set: MutableDecofReal = "current-set",
        variant: DecofString = "variant",
        enabled: MutableDecofBoolean = "enabled",
        voltage_clip: MutableDecofReal = "voltage-clip",
        feedforward_master: MutableDecofInteger = "feedforward-master",
        current_offset: MutableDecofReal = "current-offset",
        output_filter: OutputFilter2 = "output-filter",
        voltage_out: DecofReal = "voltage-out",
        status_txt: DecofString = "status-txt",
        aux: DecofReal = "aux",
        voltage_act: DecofReal = "voltage-act",
        current_clip: MutableDecofReal = "current-clip",
        forced_off: MutableDecofBoolean = "forced-off",
        emission: DecofBoolean = "emission",
    }
}

decof_node! {
    pub struct AmpPd {
        seed: PdCal = "seed",
        amp: PdCal = "amp",
    }
}

decof_node! {
    pub struct AmpFactory {
        seedonly_check: AmpFactorySeedonly = "seedonly-check",
        wavelength: MutableDecofReal = "wavelength",
        modified: DecofBoolean = "modified",
        output_limits: AmpFactoryPower = "output-limits",
        cc: AmpFactoryCc = "cc",
        last_modified: DecofString = "last-modified",
        pd: AmpPdFactorySettings = "pd",
        tc: TcFactorySettings = "tc",
        seed_limits: AmpFactoryPower = "seed-limits",
        power: MutableDecofReal = "power",
    }
}

impl AmpFactory {
    pub async fn retrieve_now(&self) -> Result<()> {
        self.node.exec("retrieve-now", &[]).await
    }

    pub async fn apply(&self) -> Result<()> {
        self.node.exec("apply", &[]).await
    }
}

decof_node! {
    pub struct AmpFactorySeedonly {
        shutdown_delay: MutableDecofReal = "shutdown-delay",
        warning_delay: MutableDecofReal = "warning-delay",
    }
}

decof_node! {
    pub struct AmpFactoryPower {
        power_min: MutableDecofReal = "power-min",
        power_max_warning_delay: MutableDecofReal = "power-max-warning-delay",
        power_max: MutableDecofReal = "power-max",
        power_min_warning_delay: MutableDecofReal = "power-min-warning-delay",
        power_min_shutdown_delay: MutableDecofReal = "power-min-shutdown-delay",
        power_max_shutdown_delay: MutableDecofReal = "power-max-shutdown-delay",
    }
}

decof_node! {
    pub struct AmpFactoryCc {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        current_set: MutableDecofReal = "current-set",
        current_clip_modified: DecofBoolean = "current-clip-modified",
        current_clip: MutableDecofReal = "current-clip",
        voltage_clip: MutableDecofReal = "voltage-clip",
        current_clip_last_modified: DecofString = "current-clip-last-modified",
    }
}

decof_node! {
    pub struct AmpPdFactorySettings {
        seed: PdCalFactorySettings = "seed",
        amp: PdCalFactorySettings = "amp",
    }
}

decof_node! {
    pub struct PdCalFactorySettings {
        cal_factor: MutableDecofReal = "cal-factor",
        cal_offset: MutableDecofReal = "cal-offset",
    }
}

decof_node! {
    pub struct TcFactorySettings {
        timeout: MutableDecofInteger = "timeout",
        power_source: MutableDecofInteger = "power-source",
        temp_min: MutableDecofReal = "temp-min",
        ok_time: MutableDecofReal = "ok-time",
        temp_set: MutableDecofReal = "temp-set",
        ntc_parallel_resistance: MutableDecofReal = "ntc-parallel-resistance",
        ntc_series_resistance: MutableDecofReal = "ntc-series-resistance",
        current_min: MutableDecofReal = "current-min",
        temp_roc_limit: MutableDecofReal = "temp-roc-limit",
        d_gain: MutableDecofReal = "d-gain",
        ok_tolerance: MutableDecofReal = "ok-tolerance",
        p_gain: MutableDecofReal = "p-gain",
        c_gain: MutableDecofReal = "c-gain",
        current_max: MutableDecofReal = "current-max",
        temp_max: MutableDecofReal = "temp-max",
        i_gain: MutableDecofReal = "i-gain",
        temp_roc_enabled: MutableDecofBoolean = "temp-roc-enabled",
    }
}

decof_node! {
    pub struct ScanGenerator {
        signal_type: MutableDecofInteger = "signal-type",
        amplitude: MutableDecofReal = "amplitude",
        unit: DecofString = "unit",
        output_channel: MutableDecofInteger = "output-channel",
        end: MutableDecofReal = "end",
        start: MutableDecofReal = "start",
        frequency: MutableDecofReal = "frequency",
        phase_shift: MutableDecofReal = "phase-shift",
        enabled: MutableDecofBoolean = "enabled",
        hold: MutableDecofBoolean = "hold",
        offset: MutableDecofReal = "offset",
    }
}

decof_node! {
    pub struct ScopeT {
        timescale: MutableDecofReal = "timescale",
        data: DecofBinary = "data",
        channel1: ScopeChannelT = "channel1",
        channel2: ScopeChannelT = "channel2",
        variant: MutableDecofInteger = "variant",
        update_rate: MutableDecofInteger = "update-rate",
        channelx: ScopeXAxisT = "channelx",
    }
}

decof_node! {
    pub struct ScopeChannelT {
        name: DecofString = "name",
        signal: MutableDecofInteger = "signal",
        enabled: MutableDecofBoolean = "enabled",
        unit: DecofString = "unit",
    }
}

decof_node! {
    pub struct ScopeXAxisT {
        name: DecofString = "name",
        xy_signal: MutableDecofInteger = "xy-signal",
        unit: DecofString = "unit",
        scope_timescale: MutableDecofReal = "scope-timescale",
        spectrum_omit_dc: MutableDecofBoolean = "spectrum-omit-dc",
        spectrum_range: MutableDecofReal = "spectrum-range",
    }
}

decof_node! {
    pub struct CtlT {
        motor: CtlMotor = "motor",
        state: DecofInteger = "state",
        state_txt: DecofString = "state-txt",
        mode_control: CtlModeControl = "mode-control",
        power: CtlPower = "power",
        fpga_fw_ver: DecofInteger = "fpga-fw-ver",
        wavelength_act: DecofReal = "wavelength-act",
        tuning_current_min: DecofReal = "tuning-current-min",
        head_temperature: DecofReal = "head-temperature",
        factory_settings: CtlFactory = "factory-settings",
        remote_control: CtlRemoteControl = "remote-control",
        wavelength_set: MutableDecofReal = "wavelength-set",
        optimization: CtlOptimizationT = "optimization",
        wavelength_min: DecofReal = "wavelength-min",
        wavelength_max: DecofReal = "wavelength-max",
        tuning_power_min: DecofReal = "tuning-power-min",
    }
}

decof_node! {
    pub struct CtlMotor {
        power_save_disabled: MutableDecofBoolean = "power-save-disabled",
        position_accuracy_microstep: MutableDecofInteger = "position-accuracy-microstep",
        position_hysteresis_fullstep: MutableDecofInteger = "position-hysteresis-fullstep",
        position_hysteresis_microstep: MutableDecofInteger = "position-hysteresis-microstep",
        position_accuracy_fullstep: MutableDecofInteger = "position-accuracy-fullstep",
        microsteps: MutableDecofBoolean = "microsteps",
    }
}

decof_node! {
    pub struct CtlModeControl {
        loop_enabled: MutableDecofBoolean = "loop-enabled",
    }
}

decof_node! {
    pub struct CtlPower {
        power_act: DecofReal = "power-act",
    }
}

decof_node! {
    pub struct CtlFactory {
        tuning_current_min: DecofReal = "tuning-current-min",
        tuning_power_min: DecofReal = "tuning-power-min",
        wavelength_min: DecofReal = "wavelength-min",
        wavelength_max: DecofReal = "wavelength-max",
    }
}

impl CtlFactory {
    pub async fn apply(&self) -> Result<()> {
        self.node.exec("apply", &[]).await
    }
}

decof_node! {
    pub struct CtlRemoteControl {
        signal: MutableDecofInteger = "signal",
        enabled: MutableDecofBoolean = "enabled",
        factor: MutableDecofReal = "factor",
    }
}

decof_node! {
    pub struct CtlOptimizationT {
        progress: DecofInteger = "progress",
    }
}

impl CtlOptimizationT {
    pub async fn abort(&self) -> Result<()> {
        self.node.exec("abort", &[]).await
    }

    pub async fn flow(&self) -> Result<()> {
        self.node.exec("flow", &[]).await
    }

    pub async fn smile(&self) -> Result<()> {
        self.node.exec("smile", &[]).await
    }
}

decof_node! {
    pub struct WideScan {
        value_set: MutableDecofReal = "value-set",
        shape: MutableDecofInteger = "shape",
        recorder_stepsize: DecofReal = "recorder-stepsize",
        continuous_mode: MutableDecofBoolean = "continuous-mode",
        duration: MutableDecofReal = "duration",
        state: DecofInteger = "state",
        trigger: WideScanTrigger = "trigger",
        state_txt: DecofString = "state-txt",
        value_unit: DecofString = "value-unit",
        output_channel: MutableDecofInteger = "output-channel",
        speed_max: DecofReal = "speed-max",
        speed_min: DecofReal = "speed-min",
        scan_end: MutableDecofReal = "scan-end",
        recorder_stepsize_set: MutableDecofReal = "recorder-stepsize-set",
        speed: MutableDecofReal = "speed",
        remaining_time: DecofInteger = "remaining-time",
        progress: DecofInteger = "progress",
        amplitude: MutableDecofReal = "amplitude",
        offset: MutableDecofReal = "offset",
        scan_begin: MutableDecofReal = "scan-begin",
        value_act: DecofReal = "value-act",
    }
}

impl WideScan {
    pub async fn set_zoom_range_to_scan_range(&self) -> Result<()> {
        self.node.exec("set-zoom-range-to-scan-range", &[]).await
    }

    pub async fn set_scan_range_to_zoom_range(&self) -> Result<()> {
        self.node.exec("set-scan-range-to-zoom-range", &[]).await
    }

    pub async fn start(&self) -> Result<()> {
        self.node.exec("start", &[]).await
    }

    pub async fn stop(&self) -> Result<()> {
        self.node.exec("stop", &[]).await
    }

    pub async fn set_output_to_zoom_offset(&self) -> Result<()> {
        self.node.exec("set-output-to-zoom-offset", &[]).await
    }
}

decof_node! {
    pub struct WideScanTrigger {
        input_channel: MutableDecofInteger = "input-channel",
        output_threshold: MutableDecofReal = "output-threshold",
        output_enabled: MutableDecofBoolean = "output-enabled",
        output_channel: MutableDecofInteger = "output-channel",
        input_enabled: MutableDecofBoolean = "input-enabled",
    }
}

decof_node! {
    pub struct PwrStab {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        input_channel: MutableDecofInteger = "input-channel",
        feedforward_enabled: MutableDecofBoolean = "feedforward-enabled",
        state: DecofInteger = "state",
        hold_output_on_unlock: MutableDecofBoolean = "hold-output-on-unlock",
        input_channel_value_act: DecofReal = "input-channel-value-act",
        setpoint: MutableDecofReal = "setpoint",
        output_channel: DecofInteger = "output-channel",
        window: PwrStabWindow = "window",
        sign: MutableDecofBoolean = "sign",
        gain: PwrStabGain3 = "gain",
        enabled: MutableDecofBoolean = "enabled",
    }
}

decof_node! {
    pub struct PwrStabWindow {
        level_hysteresis: MutableDecofReal = "level-hysteresis",
        enabled: MutableDecofBoolean = "enabled",
        level_low: MutableDecofReal = "level-low",
    }
}

decof_node! {
    pub struct PwrStabGain3 {
        i: MutableDecofReal = "i",
        p: MutableDecofReal = "p",
        all: MutableDecofReal = "all",
        d: MutableDecofReal = "d",
    }
}

decof_node! {
    pub struct LaserHead {
        version: DecofString = "version",
        fru_serial_number: DecofString = "fru-serial-number",
        ontime_txt: DecofString = "ontime-txt",
        tc: TcChannel2 = "tc",
        lock: Lock = "lock",
        ontime: DecofInteger = "ontime",
        pd: PdCal = "pd",
        factory_settings: LhFactory = "factory-settings",
        type_: DecofString = "type",
        pc: PiezoDrv2 = "pc",
        cc: CurrDrv1 = "cc",
        pressure_compensation: PressureCompensation = "pressure-compensation",
        serial_number: DecofString = "serial-number",
        legacy: DecofBoolean = "legacy",
        model: DecofString = "model",
    }
}

impl LaserHead {
    pub async fn restore(&self) -> Result<()> {
        self.node.exec("restore", &[]).await
    }

    pub async fn store(&self) -> Result<()> {
        self.node.exec("store", &[]).await
    }
}

decof_node! {
    pub struct Lock {
        locking_delay: MutableDecofInteger = "locking-delay",
        setpoint: MutableDecofReal = "setpoint",
        pid1: Pid = "pid1",
        state: DecofInteger = "state",
        state_txt: DecofString = "state-txt",
        spectrum_input_channel: MutableDecofInteger = "spectrum-input-channel",
        relock: AlRelock = "relock",
        background_trace: DecofBinary = "background-trace",
        window: AlWindow = "window",
        reset: AlReset = "reset",
        pid2: Pid = "pid2",
        lock_without_lockpoint: MutableDecofBoolean = "lock-without-lockpoint",
        type_: MutableDecofInteger = "type",
        lock_enabled: MutableDecofBoolean = "lock-enabled",
        lock_tracking: Coordinate = "lock-tracking",
        pid_selection: MutableDecofInteger = "pid-selection",
        lockin: Lockin = "lockin",
        candidate_filter: AlCandidateFilter = "candidate-filter",
        hold: MutableDecofBoolean = "hold",
        lockpoint: AlLockpoint = "lockpoint",
        candidates: DecofBinary = "candidates",
    }
}

impl Lock {
    pub async fn find_candidates(&self) -> Result<()> {
        self.node.exec("find-candidates", &[]).await
    }

    pub async fn select_lockpoint(&self, x: f64, y: f64, type_: i64) -> Result<()> {
        self.node
            .exec("select-lockpoint", &[Value::from(x), Value::from(y), Value::from(type_)])
            .await
    }

    pub async fn close(&self) -> Result<()> {
        self.node.exec("close", &[]).await
    }

    pub async fn open(&self) -> Result<()> {
        self.node.exec("open", &[]).await
    }

    pub async fn show_candidates(&self) -> Result<(String, i64)> {
        self.node.exec_output_returning("show-candidates", &[]).await
    }
}

decof_node! {
    pub struct Pid {
        setpoint: MutableDecofReal = "setpoint",
        input_channel: MutableDecofInteger = "input-channel",
        hold_output_on_unlock: MutableDecofBoolean = "hold-output-on-unlock",
        regulating_state: DecofBoolean = "regulating-state",
        output_channel: MutableDecofInteger = "output-channel",
        hold_state: DecofBoolean = "hold-state",
        sign: MutableDecofBoolean = "sign",
        gain: Gain = "gain",
        slope: MutableDecofBoolean = "slope",
        outputlimit: Outputlimit = "outputlimit",
        lock_state: DecofBoolean = "lock-state",
        enabled: MutableDecofBoolean = "enabled",
        hold: MutableDecofBoolean = "hold",
    }
}

decof_node! {
    pub struct Gain {
        i_cutoff: MutableDecofReal = "i-cutoff",
        i: MutableDecofReal = "i",
        fc_ip: DecofReal = "fc-ip",
        p: MutableDecofReal = "p",
        fc_pd: DecofReal = "fc-pd",
        i_cutoff_enabled: MutableDecofBoolean = "i-cutoff-enabled",
        d: MutableDecofReal = "d",
        all: MutableDecofReal = "all",
    }
}

decof_node! {
    pub struct Outputlimit {
        max: MutableDecofReal = "max",
        enabled: MutableDecofBoolean = "enabled",
    }
}

decof_node! {
    pub struct AlRelock {
        amplitude: MutableDecofReal = "amplitude",
        frequency: MutableDecofReal = "frequency",
        output_channel: MutableDecofInteger = "output-channel",
        enabled: MutableDecofBoolean = "enabled",
        delay: MutableDecofReal = "delay",
    }
}

decof_node! {
    pub struct AlWindow {
        input_channel: MutableDecofInteger = "input-channel",
        level_high: MutableDecofReal = "level-high",
        enabled: MutableDecofBoolean = "enabled",
        level_low: MutableDecofReal = "level-low",
        level_hysteresis: MutableDecofReal = "level-hysteresis",
    }
}

decof_node! {
    pub struct AlReset {
        enabled: MutableDecofBoolean = "enabled",
    }
}

decof_node! {
    pub struct Coordinate {
    }
}

impl Coordinate {
    pub async fn get(&self) -> Result<(f64, f64)> {
        let values = self
            .node
            .client()
            .get_values(self.node.path(), &[ValueType::Real, ValueType::Real])
            .await?;
        match values.as_slice() {
            [Value::Real(y), Value::Real(x)] => Ok((*y, *x)),
            _ => Err(DecofError::Protocol(format!(
                "Expected two reals for '{}', got {:?}",
                self.node.path(),
                values
            ))),
        }
    }

    pub async fn set(&self, y: f64, x: f64) -> Result<()> {
        self.node
            .client()
            .set_values(self.node.path(), &[Value::from(y), Value::from(x)])
            .await
    }
}

decof_node! {
    pub struct Lockin {
        input_channel: MutableDecofInteger = "input-channel",
        auto_lir: AutoLir = "auto-lir",
        modulation_output_channel: MutableDecofInteger = "modulation-output-channel",
        frequency: MutableDecofReal = "frequency",
        phase_shift: MutableDecofReal = "phase-shift",
        amplitude: MutableDecofReal = "amplitude",
        modulation_enabled: MutableDecofBoolean = "modulation-enabled",
        lock_level: MutableDecofReal = "lock-level",
    }
}

decof_node! {
    pub struct AutoLir {
        progress: DecofInteger = "progress",
    }
}

impl AutoLir {
    pub async fn auto_lir(&self) -> Result<()> {
        self.node.exec("auto-lir", &[]).await
    }
}

decof_node! {
    pub struct AlCandidateFilter {
        negative_edge: MutableDecofBoolean = "negative-edge",
        top: MutableDecofBoolean = "top",
        positive_edge: MutableDecofBoolean = "positive-edge",
        edge_min_distance: MutableDecofInteger = "edge-min-distance",
        peak_noise_tolerance: MutableDecofReal = "peak-noise-tolerance",
        bottom: MutableDecofBoolean = "bottom",
        edge_level: MutableDecofReal = "edge-level",
    }
}

decof_node! {
    pub struct AlLockpoint {
        position: Coordinate = "position",
        type_: DecofString = "type",
    }
}

decof_node! {
    pub struct LhFactory {
        wavelength: MutableDecofReal = "wavelength",
        modified: DecofBoolean = "modified",
        pc: PcFactorySettings = "pc",
        cc: LhFactoryCc = "cc",
        last_modified: DecofString = "last-modified",
        pd: PdCalFactorySettings = "pd",
        tc: TcFactorySettings = "tc",
        threshold_current: MutableDecofReal = "threshold-current",
        power: MutableDecofReal = "power",
    }
}

impl LhFactory {
    pub async fn retrieve_now(&self) -> Result<()> {
        self.node.exec("retrieve-now", &[]).await
    }

    pub async fn apply(&self) -> Result<()> {
        self.node.exec("apply", &[]).await
    }
}

decof_node! {
    pub struct PcFactorySettings {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        feedforward_enabled: MutableDecofBoolean = "feedforward-enabled",
        slew_rate: MutableDecofReal = "slew-rate",
        slew_rate_enabled: MutableDecofBoolean = "slew-rate-enabled",
        scan_offset: MutableDecofReal = "scan-offset",
        pressure_compensation_factor: MutableDecofReal = "pressure-compensation-factor",
        capacitance: MutableDecofReal = "capacitance",
        voltage_max: MutableDecofReal = "voltage-max",
        scan_amplitude: MutableDecofReal = "scan-amplitude",
        voltage_min: MutableDecofReal = "voltage-min",
    }
}

decof_node! {
    pub struct LhFactoryCc {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        positive_polarity: MutableDecofBoolean = "positive-polarity",
        current_set: MutableDecofReal = "current-set",
        current_clip_modified: DecofBoolean = "current-clip-modified",
        current_clip: MutableDecofReal = "current-clip",
        voltage_clip: MutableDecofReal = "voltage-clip",
        current_clip_last_modified: DecofString = "current-clip-last-modified",
        snubber: MutableDecofBoolean = "snubber",
    }
}

decof_node! {
    pub struct CurrDrv1 {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        snubber: MutableDecofBoolean = "snubber",
        current_clip_limit: DecofReal = "current-clip-limit",
        positive_polarity: MutableDecofBoolean = "positive-polarity",
        status: DecofInteger = "status",
        current_set_dithering: MutableDecofBoolean = "current-set-dithering",
        feedforward_enabled: MutableDecofBoolean = "feedforward-enabled",
        path: DecofString = "path",
        external_input: ExtInput2 = "external-input",
        current_act: DecofReal = "current-act",
        current_set: MutableDecofReal = "current-set",
        variant: DecofString = "variant",
        enabled: MutableDecofBoolean = "enabled",
        voltage_clip: MutableDecofReal = "voltage-clip",
        feedforward_master: MutableDecofInteger = "feedforward-master",
        current_offset: MutableDecofReal = "current-offset",
        output_filter: OutputFilter2 = "output-filter",
        status_txt: DecofString = "status-txt",
        aux: DecofReal = "aux",
        pd: DecofReal = "pd",
        voltage_act: DecofReal = "voltage-act",
        current_clip: MutableDecofReal = "current-clip",
        forced_off: MutableDecofBoolean = "forced-off",
        emission: DecofBoolean = "emission",
    }
}

decof_node! {
    pub struct PressureCompensation {
        air_pressure: DecofReal = "air-pressure",
        compensation_voltage: DecofReal = "compensation-voltage",
        enabled: MutableDecofBoolean = "enabled",
        offset: DecofReal = "offset",
        factor: MutableDecofReal = "factor",
    }
}

decof_node! {
    pub struct Recorder {
        data: RecorderData = "data",
        recording_time: MutableDecofReal = "recording-time",
        sampling_rate: DecofReal = "sampling-rate",
        inputs: RecorderInputChannels = "inputs",
        state: DecofInteger = "state",
        state_txt: DecofString = "state-txt",
        memory_size: DecofInteger = "memory-size",
        sample_count_set: MutableDecofInteger = "sample-count-set",
        sampling_interval: DecofReal = "sampling-interval",
        sample_count: DecofInteger = "sample-count",
        recording_mode: MutableDecofInteger = "recording-mode",
    }
}

decof_node! {
    pub struct RecorderData {
        zoom_data: DecofBinary = "zoom-data",
        channel1: RecorderDataChannel = "channel1",
        zoom_offset: MutableDecofReal = "zoom-offset",
        channel2: RecorderDataChannel = "channel2",
        recorded_sample_count: DecofInteger = "recorded-sample-count",
        last_recorded_sample: DecofInteger = "last-recorded-sample",
        recorded_sampling_interval: DecofReal = "recorded-sampling-interval",
        last_valid_sample: DecofInteger = "last-valid-sample",
        zoom_amplitude: MutableDecofReal = "zoom-amplitude",
        channelx: RecorderDataChannel = "channelx",
    }
}

impl RecorderData {
    pub async fn show_data(&self, start_index: i64, count: i64) -> Result<()> {
        self.node.exec("show-data", &[Value::from(start_index), Value::from(count)]).await
    }

    pub async fn zoom_out(&self) -> Result<()> {
        self.node.exec("zoom-out", &[]).await
    }

    pub async fn get_data(&self, start_index: i64, count: i64) -> Result<Vec<u8>> {
        self.node.exec_returning("get-data", &[Value::from(start_index), Value::from(count)]).await
    }
}

decof_node! {
    pub struct RecorderDataChannel {
        name: DecofString = "name",
        signal: DecofInteger = "signal",
        unit: DecofString = "unit",
    }
}

decof_node! {
    pub struct RecorderInputChannels {
        channel1: RecorderInputChannel = "channel1",
        channel2: RecorderInputChannel = "channel2",
        channelx: RecorderInputChannelx = "channelx",
    }
}

decof_node! {
    pub struct RecorderInputChannel {
        signal: MutableDecofInteger = "signal",
        low_pass_filter: RecorderLowPassFilter = "low-pass-filter",
    }
}

decof_node! {
    pub struct RecorderLowPassFilter {
        enabled: MutableDecofBoolean = "enabled",
        cut_off_frequency: MutableDecofReal = "cut-off-frequency",
    }
}

decof_node! {
    pub struct RecorderInputChannelx {
        signal: MutableDecofInteger = "signal",
    }
}

decof_node! {
    pub struct LaserDiagnosis {
        ready: DecofBoolean = "ready",
    }
}

impl LaserDiagnosis {
    pub async fn start(&self) -> Result<()> {
        self.node.exec("start", &[]).await
    }

    pub async fn execute(&self) -> Result<Vec<u8>> {
        self.node.exec_output("execute", &[]).await
    }

    pub async fn print_result(&self) -> Result<Vec<u8>> {
        self.node.exec_output("print-result", &[]).await
    }
}

decof_node! {
    pub struct LaserConfig {
        product_name: DecofString = "product-name",
        caption: MutableDecofString = "caption",
        date: DecofString = "date",
        pristine: DecofBoolean = "pristine",
        source: DecofString = "source",
    }
}

impl LaserConfig {
    pub async fn retrieve(&self) -> Result<()> {
        self.node.exec("retrieve", &[]).await
    }

    pub async fn list(&self) -> Result<String> {
        self.node.exec_returning("list", &[]).await
    }

    pub async fn load(&self, source: &str) -> Result<()> {
        self.node.exec("load", &[Value::from(source)]).await
    }

    pub async fn show(&self) -> Result<String> {
        self.node.exec_output("show", &[]).await
    }

    pub async fn export(&self) -> Result<Vec<u8>> {
        self.node.exec_output("export", &[]).await
    }

    pub async fn apply(&self) -> Result<bool> {
        self.node.exec_returning("apply", &[]).await
    }

    pub async fn import(&self, stream_input: &[u8]) -> Result<()> {
        self.node.exec_with_input("import", &[], StreamInput::Binary(stream_input)).await
    }

    pub async fn save(&self, destination: &str) -> Result<()> {
        self.node.exec("save", &[Value::from(destination)]).await
    }
}

decof_node! {
    pub struct IoBoard {
        fine_1: IoInputChannel = "fine-1",
        digital_out3: IoDigitalOutput = "digital-out3",
        revision: DecofString = "revision",
        fast_4: IoInputChannel = "fast-4",
        digital_in0: IoDigitalInput = "digital-in0",
        digital_in3: IoDigitalInput = "digital-in3",
        digital_in1: IoDigitalInput = "digital-in1",
        digital_out0: IoDigitalOutput = "digital-out0",
        fast_3: IoInputChannel = "fast-3",
        fpga_fw_ver: DecofInteger = "fpga-fw-ver",
        fine_2: IoInputChannel = "fine-2",
        out_a: IoOutputChannel = "out-a",
        digital_in2: IoDigitalInput = "digital-in2",
        out_b: IoOutputChannel = "out-b",
        serial_number: DecofString = "serial-number",
        digital_out1: IoDigitalOutput = "digital-out1",
        digital_out2: IoDigitalOutput = "digital-out2",
    }
}

impl IoBoard {
    pub async fn save(&self) -> Result<()> {
        self.node.exec("save", &[]).await
    }

    pub async fn load(&self) -> Result<()> {
        self.node.exec("load", &[]).await
    }
}

decof_node! {
    pub struct IoInputChannel {
        value_act: DecofReal = "value-act",
    }
}

decof_node! {
    pub struct IoDigitalOutput {
        value_set: MutableDecofBoolean = "value-set",
        invert: MutableDecofBoolean = "invert",
        value_act: DecofBoolean = "value-act",
        mode: MutableDecofInteger = "mode",
    }
}

decof_node! {
    pub struct IoDigitalInput {
        value_act: DecofBoolean = "value-act",
    }
}

decof_node! {
    pub struct IoOutputChannel {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        feedforward_master: MutableDecofInteger = "feedforward-master",
        voltage_offset: MutableDecofReal = "voltage-offset",
        output_filter: OutputFilter2 = "output-filter",
        feedforward_enabled: MutableDecofBoolean = "feedforward-enabled",
        voltage_max: MutableDecofReal = "voltage-max",
        external_input: ExtInput2 = "external-input",
        voltage_set: MutableDecofReal = "voltage-set",
        linked_laser: MutableDecofInteger = "linked-laser",
        voltage_min: MutableDecofReal = "voltage-min",
    }
}

decof_node! {
    pub struct McBoard {
        fpga_fw_ver: DecofString = "fpga-fw-ver",
        air_pressure: DecofReal = "air-pressure",
        revision: DecofString = "revision",
        board_temp: DecofReal = "board-temp",
        relative_humidity: DecofReal = "relative-humidity",
        serial_number: DecofString = "serial-number",
    }
}

decof_node! {
    pub struct UvShgLaser {
        remaining_optics_spots: DecofInteger = "remaining-optics-spots",
        laser_on: MutableDecofBoolean = "laser-on",
        specs_fulfilled: DecofBoolean = "specs-fulfilled",
        error: DecofInteger = "error",
        pump_power_margin: DecofReal = "pump-power-margin",
        operation_time_uv: DecofReal = "operation-time-uv",
        status: DecofInteger = "status",
        baseplate_temperature: DecofReal = "baseplate-temperature",
        error_txt: DecofString = "error-txt",
        power_set: MutableDecofReal = "power-set",
        power_act: DecofReal = "power-act",
        status_txt: DecofString = "status-txt",
        operation_time_pump: DecofReal = "operation-time-pump",
        idle_mode: MutableDecofBoolean = "idle-mode",
        emission: DecofBoolean = "emission",
    }
}

impl UvShgLaser {
    pub async fn perform_optics_shift(&self) -> Result<()> {
        self.node.exec("perform-optics-shift", &[]).await
    }

    pub async fn clear_errors(&self) -> Result<()> {
        self.node.exec("clear-errors", &[]).await
    }

    pub async fn perform_optimization(&self) -> Result<()> {
        self.node.exec("perform-optimization", &[]).await
    }
}

decof_node! {
    pub struct CcBoard {
        channel1: CurrDrv2 = "channel1",
        revision: DecofString = "revision",
        channel2: CurrDrv2 = "channel2",
        status: DecofInteger = "status",
        fpga_fw_ver: DecofInteger = "fpga-fw-ver",
        status_txt: DecofString = "status-txt",
        board_temp: DecofReal = "board-temp",
        parallel_mode: DecofBoolean = "parallel-mode",
        slot: DecofString = "slot",
        variant: DecofString = "variant",
        serial_number: DecofString = "serial-number",
    }
}

decof_node! {
    pub struct CurrDrv2 {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        snubber: MutableDecofBoolean = "snubber",
        current_clip_limit: DecofReal = "current-clip-limit",
        positive_polarity: MutableDecofBoolean = "positive-polarity",
        status: DecofInteger = "status",
        current_set_dithering: MutableDecofBoolean = "current-set-dithering",
        feedforward_enabled: MutableDecofBoolean = "feedforward-enabled",
        path: DecofString = "path",
        external_input: ExtInput3 = "external-input",
        current_act: DecofReal = "current-act",
        current_set: MutableDecofReal = "current-set",
        variant: DecofString = "variant",
        enabled: MutableDecofBoolean = "enabled",
        voltage_clip: MutableDecofReal = "voltage-clip",
        feedforward_master: MutableDecofInteger = "feedforward-master",
        current_offset: MutableDecofReal = "current-offset",
        output_filter: OutputFilter3 = "output-filter",
        status_txt: DecofString = "status-txt",
        aux: DecofReal = "aux",
        pd: DecofReal = "pd",
        voltage_act: DecofReal = "voltage-act",
        current_clip: MutableDecofReal = "current-clip",
        forced_off: MutableDecofBoolean = "forced-off",
        emission: DecofBoolean = "emission",
    }
}

decof_node! {
    pub struct ExtInput3 {
        signal: MutableDecofInteger = "signal",
        enabled: MutableDecofBoolean = "enabled",
        factor: MutableDecofReal = "factor",
    }
}

decof_node! {
    pub struct OutputFilter3 {
        slew_rate_limited: DecofBoolean = "slew-rate-limited",
        slew_rate: MutableDecofReal = "slew-rate",
        slew_rate_enabled: MutableDecofBoolean = "slew-rate-enabled",
    }
}

decof_node! {
    pub struct PcBoard {
        fpga_fw_ver: DecofInteger = "fpga-fw-ver",
        channel1: PiezoDrv3 = "channel1",
        revision: DecofString = "revision",
        channel2: PiezoDrv3 = "channel2",
        status: DecofInteger = "status",
        status_txt: DecofString = "status-txt",
        slot: DecofString = "slot",
        variant: DecofString = "variant",
        serial_number: DecofString = "serial-number",
        channel_count: DecofInteger = "channel-count",
    }
}

decof_node! {
    pub struct PiezoDrv3 {
        feedforward_factor: MutableDecofReal = "feedforward-factor",
        status: DecofInteger = "status",
        feedforward_enabled: MutableDecofBoolean = "feedforward-enabled",
        path: DecofString = "path",
        external_input: ExtInput3 = "external-input",
        enabled: MutableDecofBoolean = "enabled",
        voltage_min: MutableDecofReal = "voltage-min",
        feedforward_master: MutableDecofInteger = "feedforward-master",
        voltage_set: MutableDecofReal = "voltage-set",
        output_filter: OutputFilter3 = "output-filter",
        voltage_max: MutableDecofReal = "voltage-max",
        heatsink_temp: DecofReal = "heatsink-temp",
        status_txt: DecofString = "status-txt",
        voltage_act: DecofReal = "voltage-act",
        voltage_set_dithering: MutableDecofBoolean = "voltage-set-dithering",
    }
}

decof_node! {
    pub struct PowerSupply {
        voltage_3_v3: DecofReal = "voltage-3V3",
        revision: DecofString = "revision",
        current_5_v: DecofReal = "current-5V",
        serial_number: DecofString = "serial-number",
        voltage_15_vn: DecofReal = "voltage-15Vn",
        voltage_15_v: DecofReal = "voltage-15V",
        heatsink_temp: DecofReal = "heatsink-temp",
        type_: DecofString = "type",
        board_temp: DecofReal = "board-temp",
        current_15_vn: DecofReal = "current-15Vn",
        current_15_v: DecofReal = "current-15V",
        voltage_5_v: DecofReal = "voltage-5V",
        status_txt: DecofString = "status-txt",
        status: DecofInteger = "status",
        load: DecofReal = "load",
    }
}

decof_node! {
    pub struct TcBoard {
        fpga_fw_ver: DecofString = "fpga-fw-ver",
        channel1: TcChannel2 = "channel1",
        revision: DecofString = "revision",
        channel2: TcChannel2 = "channel2",
        board_temp: DecofReal = "board-temp",
        slot: DecofString = "slot",
        serial_number: DecofString = "serial-number",
    }
}

decof_node! {
    pub struct Cc5000Board {
        channel1: Cc5000Drv = "channel1",
        regulator_temp: DecofReal = "regulator-temp",
        revision: DecofString = "revision",
        power_15v: MutableDecofBoolean = "power-15v",
        status: DecofInteger = "status",
        regulator_temp_fuse: DecofReal = "regulator-temp-fuse",
        inverter_temp_fuse: DecofReal = "inverter-temp-fuse",
        fpga_fw_ver: DecofInteger = "fpga-fw-ver",
        inverter_temp: DecofReal = "inverter-temp",
        board_temp: DecofReal = "board-temp",
        parallel_mode: DecofBoolean = "parallel-mode",
        status_txt: DecofString = "status-txt",
        slot: DecofString = "slot",
        variant: DecofString = "variant",
        serial_number: DecofString = "serial-number",
    }
}

decof_node! {
    pub struct AutoNloToplevel {
        laser_on: MutableDecofBoolean = "laser-on",
        amplifier_current_margin: DecofReal = "amplifier-current-margin",
        error: DecofInteger = "error",
        optimization_settings: AutoNloOptimizationOptions = "optimization-settings",
        status: DecofInteger = "status",
        idle_mode: MutableDecofBoolean = "idle-mode",
        error_txt: DecofString = "error-txt",
        power_set: MutableDecofReal = "power-set",
        power_act: DecofReal = "power-act",
        operation_time_amplifier: DecofReal = "operation-time-amplifier",
        operation_time_master: DecofReal = "operation-time-master",
        status_txt: DecofString = "status-txt",
        operation_time_cavity: DecofReal = "operation-time-cavity",
        power_stabilization_settings: AutoNloPowerStabilizationSettings = "power-stabilization-settings",
        automatic_mode: MutableDecofBoolean = "automatic-mode",
        emission: DecofBoolean = "emission",
    }
}

impl AutoNloToplevel {
    pub async fn reset_operation_time_cavity(&self) -> Result<()> {
        self.node.exec("reset-operation-time-cavity", &[]).await
    }

    pub async fn clear_errors(&self) -> Result<()> {
        self.node.exec("clear-errors", &[]).await
    }

    pub async fn perform_optimization(&self) -> Result<()> {
        self.node.exec("perform-optimization", &[]).await
    }
}

decof_node! {
    pub struct AutoNloOptimizationOptions {
        pressure_compensation: MutableDecofBoolean = "pressure-compensation",
        single_mode_optimization: MutableDecofBoolean = "single-mode-optimization",
        auto_align: MutableDecofBoolean = "auto-align",
    }
}

decof_node! {
    pub struct AutoNloPowerStabilizationSettings {
        power_min: MutableDecofReal = "power-min",
        power_max: MutableDecofReal = "power-max",
        gain: PwrStabGain2 = "gain",
        amplifier_initial_current: MutableDecofReal = "amplifier-initial-current",
    }
}

decof_node! {
    pub struct PwrStabGain2 {
        i: MutableDecofReal = "i",
        p: MutableDecofReal = "p",
        all: MutableDecofReal = "all",
        d: MutableDecofReal = "d",
    }
}

decof_node! {
    pub struct Standby {
        laser2: StandbyLaser2 = "laser2",
        state: DecofInteger = "state",
        laser1: StandbyLaser = "laser1",
        enabled: MutableDecofBoolean = "enabled",
    }
}

decof_node! {
    pub struct StandbyLaser2 {
        dl: StandbyDl = "dl",
    }
}

decof_node! {
    pub struct StandbyDl {
        disable_pc: MutableDecofBoolean = "disable-pc",
        disable_cc: MutableDecofBoolean = "disable-cc",
        disable_tc: MutableDecofBoolean = "disable-tc",
    }
}

decof_node! {
    pub struct StandbyLaser {
        amp: StandbyAmp = "amp",
        dl: StandbyDl = "dl",
        nlo: StandbyShg = "nlo",
        ctl: StandbyCtl = "ctl",
    }
}

decof_node! {
    pub struct StandbyAmp {
        disable_cc: MutableDecofBoolean = "disable-cc",
        disable_tc: MutableDecofBoolean = "disable-tc",
    }
}

decof_node! {
    pub struct StandbyShg {
        disable_servo_subsystem: MutableDecofBoolean = "disable-servo-subsystem",
        disable_pc: MutableDecofBoolean = "disable-pc",
        disable_cavity_lock: MutableDecofBoolean = "disable-cavity-lock",
        disable_power_stabilization: MutableDecofBoolean = "disable-power-stabilization",
        disable_tc: MutableDecofBoolean = "disable-tc",
    }
}

decof_node! {
    pub struct StandbyCtl {
        disable: MutableDecofBoolean = "disable",
    }
}

decof_node! {
    pub struct PdhBoard {
        channel1: PdhChannel = "channel1",
        revision: DecofString = "revision",
        channel2: PdhChannel = "channel2",
        status: DecofInteger = "status",
        fpga_fw_ver: DecofInteger = "fpga-fw-ver",
        status_txt: DecofString = "status-txt",
        board_temp: DecofReal = "board-temp",
        slot: DecofString = "slot",
        serial_number: DecofString = "serial-number",
    }
}

impl PdhBoard {
    pub async fn load(&self) -> Result<()> {
        self.node.exec("load", &[]).await
    }

    pub async fn save(&self) -> Result<()> {
        self.node.exec("save", &[]).await
    }
}

decof_node! {
    pub struct PdhChannel {
        input_level_max: MutableDecofInteger = "input-level-max",
        lo_output_amplitude_vpp: DecofReal = "lo-output-amplitude-vpp",
        phase_shift: MutableDecofReal = "phase-shift",
        lock_level: MutableDecofReal = "lock-level",
        modulation_amplitude_vpp: DecofReal = "modulation-amplitude-vpp",
        modulation_amplitude_dbm: MutableDecofReal = "modulation-amplitude-dbm",
        lo_output_amplitude_dbm: MutableDecofReal = "lo-output-amplitude-dbm",
        use_fast_oscillator: MutableDecofBoolean = "use-fast-oscillator",
        lo_output_enabled: MutableDecofBoolean = "lo-output-enabled",
        modulation_enabled: MutableDecofBoolean = "modulation-enabled",
    }
}

decof_node! {
    pub struct Display {
        brightness: MutableDecofReal = "brightness",
        state: DecofInteger = "state",
        auto_dark: MutableDecofBoolean = "auto-dark",
        idle_timeout: MutableDecofInteger = "idle-timeout",
    }
}

impl Display {
    pub async fn update_state(&self, active: bool) -> Result<()> {
        self.node.exec("update-state", &[Value::from(active)]).await
    }

    pub async fn save(&self) -> Result<()> {
        self.node.exec("save", &[]).await
    }

    pub async fn load(&self) -> Result<()> {
        self.node.exec("load", &[]).await
    }
}

decof_node! {
    pub struct LaserCommon {
        scan: ScanSynchronization = "scan",
    }
}

impl LaserCommon {
    pub async fn apply_all(&self) -> Result<()> {
        self.node.exec("apply-all", &[]).await
    }

    pub async fn store_all(&self) -> Result<()> {
        self.node.exec("store-all", &[]).await
    }

    pub async fn load_all(&self) -> Result<()> {
        self.node.exec("load-all", &[]).await
    }

    pub async fn restore_all(&self) -> Result<()> {
        self.node.exec("restore-all", &[]).await
    }

    pub async fn retrieve_all(&self) -> Result<()> {
        self.node.exec("retrieve-all", &[]).await
    }

    pub async fn save_all(&self) -> Result<()> {
        self.node.exec("save-all", &[]).await
    }
}

decof_node! {
    pub struct ScanSynchronization {
        sync_laser2: MutableDecofBoolean = "sync-laser2",
        sync_laser1: MutableDecofBoolean = "sync-laser1",
        frequency: MutableDecofReal = "frequency",
    }
}

impl ScanSynchronization {
    pub async fn sync(&self) -> Result<()> {
        self.node.exec("sync", &[]).await
    }

    pub async fn save(&self) -> Result<()> {
        self.node.exec("save", &[]).await
    }

    pub async fn load(&self) -> Result<()> {
        self.node.exec("load", &[]).await
    }
}

decof_node! {
    pub struct Buzzer {
        welcome: MutableDecofString = "welcome",
    }
}

impl Buzzer {
    pub async fn play(&self, melody: &str) -> Result<()> {
        self.node.exec("play", &[Value::from(melody)]).await
    }

    pub async fn play_welcome(&self) -> Result<()> {
        self.node.exec("play-welcome", &[]).await
    }
}

decof_node! {
    pub struct DLCpro {
        net_conf: Ipconfig = "net-conf",
        fw_update: FwUpdate = "fw-update",
        time: MutableDecofString = "time",
        system_messages: SystemMessages = "system-messages",
        system_service_report: ServiceReport = "system-service-report",
        licenses: Licenses = "licenses",
        tan: DecofInteger = "tan",
        ul: MutableDecofInteger = "ul",
        decof_ver: DecofString = "decof-ver",
        echo: MutableDecofBoolean = "echo",
        system_model: DecofString = "system-model",
        system_type: DecofString = "system-type",
        uptime: DecofInteger = "uptime",
        system_label: MutableDecofString = "system-label",
        uptime_txt: DecofString = "uptime-txt",
        ssw_ver: DecofString = "ssw-ver",
        vcs_id: DecofString = "vcs-id",
        serial_number: DecofString = "serial-number",
        build_information: BuildInformation = "build-information",
        fw_ver: DecofString = "fw-ver",
        ssw_vcs_id: DecofString = "ssw-vcs-id",
        laser2: Laser = "laser2",
        io: IoBoard = "io",
        mc: McBoard = "mc",
        emission_button_enabled: MutableDecofBoolean = "emission-button-enabled",
        uv: UvShgLaser = "uv",
        cc1: CcBoard = "cc1",
        system_health_txt: DecofString = "system-health-txt",
        pc3: PcBoard = "pc3",
        power_supply: PowerSupply = "power-supply",
        tc1: TcBoard = "tc1",
        frontkey_locked: DecofBoolean = "frontkey-locked",
        pc2: PcBoard = "pc2",
        ampcc2: Cc5000Board = "ampcc2",
        auto_nlo: AutoNloToplevel = "auto-nlo",
        interlock_open: DecofBoolean = "interlock-open",
        standby: Standby = "standby",
        pdh1: PdhBoard = "pdh1",
        tc2: TcBoard = "tc2",
        display: Display = "display",
        ampcc1: Cc5000Board = "ampcc1",
        system_health: DecofInteger = "system-health",
        pc1: PcBoard = "pc1",
        laser_common: LaserCommon = "laser-common",
        cc2: CcBoard = "cc2",
        buzzer: Buzzer = "buzzer",
        laser1: Laser = "laser1",
        emission: DecofBoolean = "emission",
    }
}

impl DLCpro {
    /// Tree for the device behind `connection`. Call [`DLCpro::open`] before use.
    pub fn new(connection: impl Connection) -> Self {
        Self::from_client(Client::new(connection))
    }

    /// Tree on an existing client.
    pub fn from_client(client: Client) -> Self {
        <Self as Node>::bind(NodeRef::root(client))
    }

    /// The client all nodes talk through.
    pub fn client(&self) -> &Client {
        self.node.client()
    }

    /// Open the command and monitoring lines.
    pub async fn open(&self) -> Result<()> {
        self.client().open().await
    }

    /// Close the connection.
    pub async fn close(&self) -> Result<()> {
        self.client().close().await
    }

    /// Change the user level; see [`Client::change_ul`].
    pub async fn change_ul(&self, level: AccessLevel, password: &str) -> Result<AccessLevel> {
        self.client().change_ul(level, password).await
    }

    pub async fn service_log(&self) -> Result<String> {
        self.node.exec_output("service-log", &[]).await
    }

    pub async fn system_connections(&self) -> Result<(String, i64)> {
        self.node.exec_output_returning("system-connections", &[]).await
    }

    pub async fn debug_log(&self) -> Result<String> {
        self.node.exec_output("debug-log", &[]).await
    }

    pub async fn error_log(&self) -> Result<String> {
        self.node.exec_output("error-log", &[]).await
    }

    pub async fn service_report(&self) -> Result<Vec<u8>> {
        self.node.exec_output("service-report", &[]).await
    }

    pub async fn service_script(&self, stream_input: &[u8]) -> Result<()> {
        self.node.exec_with_input("service-script", &[], StreamInput::Binary(stream_input)).await
    }

    pub async fn change_password(&self, password: &str) -> Result<()> {
        self.node.exec("change-password", &[Value::from(password)]).await
    }

    pub async fn system_summary(&self) -> Result<String> {
        self.node.exec_output("system-summary", &[]).await
    }
}
